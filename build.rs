use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/ffi.rs");
    println!("cargo:rerun-if-changed=src/filters/resonant_lowpass.rs");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = env::var("OUT_DIR").unwrap();
    let include_dir = PathBuf::from(out_dir).join("include");
    let header = include_dir.join("reslp.h");

    // Header generation never fails the build
    let bindings = match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("RESLP_H")
        .generate()
    {
        Ok(bindings) => bindings,
        Err(err) => {
            println!("cargo:warning=cbindgen failed: {}", err);
            return;
        }
    };

    if let Err(err) = std::fs::create_dir_all(&include_dir) {
        println!("cargo:warning=failed to create {}: {}", include_dir.display(), err);
        return;
    }
    let mut contents = Vec::new();
    bindings.write(&mut contents);
    if let Err(err) = std::fs::write(&header, contents) {
        println!("cargo:warning=failed to write {}: {}", header.display(), err);
    }
}
