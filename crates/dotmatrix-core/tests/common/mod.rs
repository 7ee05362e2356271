#![allow(dead_code)]

use dotmatrix_core::{cartridge::Cartridge, gameboy::GameBoy};

/// A 32 KiB ROM-only image with `code` placed at the entry point (0x100).
pub fn rom_image(code: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x100..0x100 + code.len()].copy_from_slice(code);
    rom
}

/// A 32 KiB image with the given cartridge-type and RAM-size header bytes.
pub fn rom_image_with_header(cart_type: u8, ram_code: u8) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x147] = cart_type;
    rom[0x149] = ram_code;
    rom
}

/// A machine executing `code` from the cartridge entry point.
pub fn machine_with_rom(code: &[u8]) -> GameBoy {
    let mut gb = GameBoy::new();
    gb.mmu.load_cart(Cartridge::load(rom_image(code)));
    gb
}

/// A bare machine with the LCD switched off and all interrupt requests
/// cleared, ready for `run_wram` — the quiet baseline for CPU-level tests.
pub fn quiet_machine() -> GameBoy {
    let mut gb = GameBoy::new();
    gb.mmu.write_byte(0xFF40, 0x00);
    gb.mmu.write_byte(0xFF0F, 0x00);
    gb
}

/// Place `code` in WRAM at 0xC000 and point the PC at it.
pub fn run_from_wram(gb: &mut GameBoy, code: &[u8]) {
    for (i, byte) in code.iter().enumerate() {
        gb.mmu.write_byte(0xC000 + i as u16, *byte);
    }
    gb.cpu.pc = 0xC000;
}
