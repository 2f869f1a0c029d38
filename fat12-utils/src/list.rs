use fat12::io::std::FileIO;
use fat12::FAT12;

use crate::CliError;

pub fn list(fat12: &mut FAT12<FileIO>) -> Result<(), CliError> {
    let root = fat12.load_root_directory()?;
    if let Some(label) = root.volume_label() {
        println!("Volume {}", label);
    }
    for entry in root.files() {
        let attrs = entry.attributes;
        print!("{}", if entry.is_directory() { "d" } else { "-" });
        print!("{}", if attrs.read_only() { "r" } else { "-" });
        print!("{}", if attrs.system() { "s" } else { "-" });
        print!("{}", if attrs.hidden() { "h" } else { "-" });
        print!("{}", if attrs.archive() { "a" } else { "-" });
        print!(" {:8}", entry.size);
        match entry.modified_at() {
            Some(datetime) => print!(" {}", datetime.format("%Y-%m-%d %H:%M:%S")),
            None => print!(" {:19}", "-"),
        }
        if entry.is_directory() {
            println!(" {}/", entry.name);
        } else {
            println!(" {}", entry.name);
        }
    }
    Ok(())
}
