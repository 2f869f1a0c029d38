use fat12::io::std::FileIO;
use fat12::FAT12;

use crate::CliError;

pub fn info(fat12: &FAT12<FileIO>) -> Result<(), CliError> {
    let boot = fat12.boot_parameters();
    println!("OEM id:              {}", String::from_utf8_lossy(&boot.oem_id));
    println!("Bytes per sector:    {}", boot.bytes_per_sector);
    println!("Sectors per cluster: {}", boot.sectors_per_cluster);
    println!("Reserved sectors:    {}", boot.reserved_sectors);
    println!("Number of FATs:      {}", boot.number_of_fats);
    println!("Sectors per FAT:     {}", boot.sectors_per_fat);
    println!("Root entries:        {}", boot.root_entry_count);
    println!("Total sectors:       {}", boot.total_sectors);
    println!("Media descriptor:    {:#04x}", boot.media_descriptor);
    println!("FAT sector:          {}", boot.fat_sector());
    println!("Root sector:         {}", boot.root_directory_sector());
    println!("Data sector:         {}", boot.data_region_sector());
    if let Some(id) = boot.volume_id() {
        println!("Volume id:           {:08X}", id);
    }
    if let Some(label) = boot.volume_label() {
        println!("Volume label:        {}", label);
    }
    if let Some(system_id) = boot.system_id() {
        println!("System id:           {}", system_id);
    }
    Ok(())
}
