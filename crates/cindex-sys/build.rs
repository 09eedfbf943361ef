use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Runs `llvm-config` with a single flag and returns its trimmed output.
fn llvm_config(flag: &str) -> Option<String> {
    let binary = env::var("LLVM_CONFIG_PATH").unwrap_or_else(|_| "llvm-config".to_string());
    let output = Command::new(binary).arg(flag).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?;
    Some(value.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=wrapper.h");
    println!("cargo:rerun-if-env-changed=LIBCLANG_PATH");
    println!("cargo:rerun-if-env-changed=LIBCLANG_INCLUDE_PATH");
    println!("cargo:rerun-if-env-changed=LLVM_CONFIG_PATH");

    let lib_dir = env::var("LIBCLANG_PATH")
        .ok()
        .or_else(|| llvm_config("--libdir"));
    let include_dir = env::var("LIBCLANG_INCLUDE_PATH")
        .ok()
        .or_else(|| llvm_config("--includedir"));

    if let Some(dir) = &lib_dir {
        println!("cargo:rustc-link-search=native={}", dir);
    }
    println!("cargo:rustc-link-lib=dylib=clang");

    let mut builder = bindgen::Builder::default()
        .header("wrapper.h")
        // Only the C API surface
        .allowlist_function("clang_.*")
        .allowlist_type("CX.*")
        .allowlist_type("IndexerCallbacks")
        .allowlist_var("CX.*")
        .allowlist_var("CINDEX_VERSION.*")
        // Keep enum constants as plain integers named exactly as in the headers
        .default_enum_style(bindgen::EnumVariation::Consts)
        .prepend_enum_name(false)
        .derive_default(true)
        .layout_tests(false)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()));

    if let Some(dir) = &include_dir {
        builder = builder.clang_arg(format!("-I{}", dir));
    }

    let bindings = builder.generate().expect("Unable to generate libclang bindings");

    // Write the bindings to the $OUT_DIR/bindings.rs file.
    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");
}
