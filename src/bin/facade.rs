//! Facade: one `start` call hides the boot choreography of the CPU, memory
//! and disk subsystems behind a single high-level entry point.

// ===== Subsystems =====

struct Cpu;

impl Cpu {
    fn freeze(&self) {
        println!("CPU: freeze");
    }

    fn jump(&self, position: u64) {
        println!("CPU: jump to {position}");
    }

    fn execute(&self) {
        println!("CPU: execute");
    }
}

struct Memory;

impl Memory {
    fn load(&self, position: u64, data: &str) {
        println!("Memory: loading \"{data}\" to position {position}");
    }
}

struct HardDrive;

impl HardDrive {
    fn read(&self, lba: u64, size: usize) -> String {
        println!("HardDrive: reading {size} bytes at {lba}");
        "OS Boot Data".to_string()
    }
}

// ===== Facade =====

struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
}

impl ComputerFacade {
    fn new() -> Self {
        Self {
            cpu: Cpu,
            memory: Memory,
            hard_drive: HardDrive,
        }
    }

    fn start(&self) {
        println!("Starting computer...");
        self.cpu.freeze();
        let boot_data = self.hard_drive.read(0, 1024);
        self.memory.load(0, &boot_data);
        self.cpu.jump(0);
        self.cpu.execute();
    }
}

fn main() {
    let computer = ComputerFacade::new();
    computer.start(); // one call, whole boot sequence
}

// Expected output:
//
// Starting computer...
// CPU: freeze
// HardDrive: reading 1024 bytes at 0
// Memory: loading "OS Boot Data" to position 0
// CPU: jump to 0
// CPU: execute
