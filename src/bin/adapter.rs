//! Adapter: a British plug is made to fit the Chinese socket interface the
//! client expects, by wrapping it and delegating the call.

// ===== Target contract the client understands =====

trait ChineseSocket {
    fn charge(&self);
}

// ===== Incompatible existing type =====

struct BritishPlug;

impl BritishPlug {
    fn charge_by_british_plug(&self) {
        println!("Charging using British Plug");
    }
}

// ===== Adapter =====

struct PlugAdapter {
    plug: BritishPlug,
}

impl ChineseSocket for PlugAdapter {
    fn charge(&self) {
        println!("Adapter converts Chinese socket to British plug...");
        self.plug.charge_by_british_plug();
    }
}

fn main() {
    // The client only knows the Chinese socket contract.
    let socket: Box<dyn ChineseSocket> = Box::new(PlugAdapter { plug: BritishPlug });
    socket.charge();
}

// Expected output:
//
// Adapter converts Chinese socket to British plug...
// Charging using British Plug
