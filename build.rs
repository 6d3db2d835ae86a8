fn main() {
    // FFI scaffolding comes from the uniffi::setup_scaffolding!() proc-macro,
    // there is no UDL file to track
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
