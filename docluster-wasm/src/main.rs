//! Trunk entry point

fn main() {
    docluster_wasm::start();
}
