use std::{io, path::Path};

use crate::{
    cartridge::Cartridge,
    cpu::Cpu,
    input::Button,
    mmu::{Mmu, IO_IF, IO_LCDC},
    ppu::{FRAME_CYCLES, SCREEN_HEIGHT, SCREEN_WIDTH},
};

/// The whole machine: CPU plus the MMU, which owns every other component.
/// Hosts drive emulation through this facade and read the framebuffer and
/// audio buffer back out between frames.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
}

impl GameBoy {
    /// Create a machine in the post-boot state, with no cartridge inserted.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mmu: Mmu::new(),
        }
    }

    /// Re-initialize to the post-boot state while preserving the loaded
    /// cartridge.
    pub fn reset(&mut self) {
        let cart = self.mmu.cart.take();
        self.cpu = Cpu::new();
        self.mmu = Mmu::new();
        if let Some(cart) = cart {
            self.mmu.load_cart(cart);
        }
    }

    /// Read a cartridge dump from disk and insert it. On failure the
    /// previously loaded cartridge is left in place.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let cart = Cartridge::from_file(path)?;
        self.mmu.load_cart(cart);
        Ok(())
    }

    pub fn rom_title(&self) -> &str {
        self.mmu
            .cart
            .as_ref()
            .map(|cart| cart.title.as_str())
            .unwrap_or("")
    }

    /// Execute one instruction, let the PPU, timer and APU consume its
    /// cycles, then dispatch any pending interrupt. Returns the T-cycles
    /// spent. Dispatch is the last phase, so an interrupt raised by a device
    /// is serviced before the next instruction fetches; its 20-cycle entry
    /// latency is charged to the CPU only.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.mmu);
        self.mmu.tick(cycles);
        cycles + self.cpu.handle_interrupts(&mut self.mmu)
    }

    /// Run until the PPU completes a frame (enters VBlank) exactly once.
    /// Bounded by a two-frame cycle budget so a ROM that switches the LCD
    /// off cannot wedge the caller.
    pub fn run_frame(&mut self) {
        self.mmu.ppu.frame_ready = false;
        let mut budget = 2 * FRAME_CYCLES as i64;
        while !self.mmu.ppu.frame_ready && budget > 0 {
            budget -= self.step() as i64;
        }
    }

    /// Latch a button state; a fresh press raises the joypad interrupt.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        let Mmu { input, io, .. } = &mut self.mmu;
        input.set_button(button, pressed, &mut io[IO_IF]);
    }

    pub fn lcd_enabled(&self) -> bool {
        self.mmu.io[IO_LCDC] & 0x80 != 0
    }

    /// 160x144 2-bit shades, row-major. The host maps shades to colors.
    pub fn framebuffer(&self) -> &[u8; SCREEN_WIDTH * SCREEN_HEIGHT] {
        &self.mmu.ppu.framebuffer
    }

    /// Stereo-interleaved samples accumulated since the last drain.
    pub fn audio(&self) -> &[i16] {
        self.mmu.apu.samples()
    }

    /// Reset the audio write position after the host has consumed `audio()`.
    pub fn drain_audio(&mut self) {
        self.mmu.apu.clear_samples();
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}
