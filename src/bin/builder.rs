//! Builder: a complex object is assembled step by step. A director drives
//! the classic step-builder; the fluent builder shows the consuming-`self`
//! idiom where ownership flows through the chain and out of `build`.

// ===== Product =====

#[derive(Debug, Default)]
struct Computer {
    cpu: String,
    gpu: String,
    memory: String,
    storage: String,
}

impl Computer {
    fn show(&self) {
        println!("Computer Configuration:");
        println!("  CPU: {}", self.cpu);
        println!("  GPU: {}", self.gpu);
        println!("  Memory: {}", self.memory);
        println!("  Storage: {}", self.storage);
    }
}

// ===== Step builder driven by a director =====

trait ComputerBuilder {
    fn build_cpu(&mut self);
    fn build_gpu(&mut self);
    fn build_memory(&mut self);
    fn build_storage(&mut self);
    fn finish(self: Box<Self>) -> Computer;
}

#[derive(Default)]
struct GamingComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder for GamingComputerBuilder {
    fn build_cpu(&mut self) {
        self.computer.cpu = "Intel i9".to_string();
    }

    fn build_gpu(&mut self) {
        self.computer.gpu = "NVIDIA RTX 4090".to_string();
    }

    fn build_memory(&mut self) {
        self.computer.memory = "32GB DDR5".to_string();
    }

    fn build_storage(&mut self) {
        self.computer.storage = "2TB NVMe SSD".to_string();
    }

    fn finish(self: Box<Self>) -> Computer {
        self.computer
    }
}

struct Director;

impl Director {
    fn construct(builder: &mut dyn ComputerBuilder) {
        builder.build_cpu();
        builder.build_gpu();
        builder.build_memory();
        builder.build_storage();
    }
}

// ===== Fluent builder =====

#[derive(Default)]
struct ComputerSpec {
    computer: Computer,
}

impl ComputerSpec {
    fn cpu(mut self, cpu: &str) -> Self {
        self.computer.cpu = cpu.to_string();
        self
    }

    fn gpu(mut self, gpu: &str) -> Self {
        self.computer.gpu = gpu.to_string();
        self
    }

    fn memory(mut self, memory: &str) -> Self {
        self.computer.memory = memory.to_string();
        self
    }

    fn storage(mut self, storage: &str) -> Self {
        self.computer.storage = storage.to_string();
        self
    }

    fn build(self) -> Computer {
        self.computer
    }
}

fn main() {
    let mut builder = Box::new(GamingComputerBuilder::default());
    Director::construct(builder.as_mut());
    let gaming_pc = builder.finish();
    gaming_pc.show();

    println!();

    let office_pc = ComputerSpec::default()
        .cpu("Intel i7")
        .gpu("NVIDIA RTX 3060")
        .memory("16GB DDR4")
        .storage("1TB SSD")
        .build();
    office_pc.show();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn director_runs_every_step() {
        let mut builder = Box::new(GamingComputerBuilder::default());
        Director::construct(builder.as_mut());
        let pc = builder.finish();

        assert_eq!(pc.cpu, "Intel i9");
        assert_eq!(pc.storage, "2TB NVMe SSD");
    }

    #[test]
    fn fluent_builder_keeps_ordering_irrelevant() {
        let pc = ComputerSpec::default()
            .storage("1TB SSD")
            .cpu("Intel i7")
            .build();

        assert_eq!(pc.cpu, "Intel i7");
        assert_eq!(pc.storage, "1TB SSD");
        assert!(pc.gpu.is_empty());
    }
}

// Expected output:
//
// Computer Configuration:
//   CPU: Intel i9
//   GPU: NVIDIA RTX 4090
//   Memory: 32GB DDR5
//   Storage: 2TB NVMe SSD
//
// Computer Configuration:
//   CPU: Intel i7
//   GPU: NVIDIA RTX 3060
//   Memory: 16GB DDR4
//   Storage: 1TB SSD
