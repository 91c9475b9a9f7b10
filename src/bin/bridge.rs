//! Bridge: the remote-control abstraction and the TV implementation vary
//! independently. The remote holds its TV behind the implementation
//! contract; the advanced remote extends the abstraction side only.

// ===== Implementation contract =====

trait Tv {
    fn on(&self);
    fn off(&self);
    fn tune_channel(&self, channel: u32);
}

struct SonyTv;
struct SamsungTv;

impl Tv for SonyTv {
    fn on(&self) {
        println!("Sony TV is ON");
    }

    fn off(&self) {
        println!("Sony TV is OFF");
    }

    fn tune_channel(&self, channel: u32) {
        println!("Sony TV tuned to channel {channel}");
    }
}

impl Tv for SamsungTv {
    fn on(&self) {
        println!("Samsung TV is ON");
    }

    fn off(&self) {
        println!("Samsung TV is OFF");
    }

    fn tune_channel(&self, channel: u32) {
        println!("Samsung TV tuned to channel {channel}");
    }
}

// ===== Abstraction side =====

struct RemoteControl {
    tv: Box<dyn Tv>,
}

impl RemoteControl {
    fn new(tv: Box<dyn Tv>) -> Self {
        Self { tv }
    }

    fn turn_on(&self) {
        self.tv.on();
    }

    fn turn_off(&self) {
        self.tv.off();
    }

    fn set_channel(&self, channel: u32) {
        self.tv.tune_channel(channel);
    }
}

/// Extends the abstraction without touching any TV implementation.
struct AdvancedRemoteControl {
    remote: RemoteControl,
}

impl AdvancedRemoteControl {
    fn new(tv: Box<dyn Tv>) -> Self {
        Self {
            remote: RemoteControl::new(tv),
        }
    }

    fn mute(&self) {
        println!("TV is muted.");
    }
}

fn main() {
    let basic_remote = RemoteControl::new(Box::new(SonyTv));
    basic_remote.turn_on();
    basic_remote.set_channel(5);
    basic_remote.turn_off();

    println!("-------------------------");

    let advanced_remote = AdvancedRemoteControl::new(Box::new(SamsungTv));
    advanced_remote.remote.turn_on();
    advanced_remote.remote.set_channel(10);
    advanced_remote.mute();
    advanced_remote.remote.turn_off();
}

// Expected output:
//
// Sony TV is ON
// Sony TV tuned to channel 5
// Sony TV is OFF
// -------------------------
// Samsung TV is ON
// Samsung TV tuned to channel 10
// TV is muted.
// Samsung TV is OFF
