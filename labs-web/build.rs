use std::path::Path;
use std::process::Command;

fn main() {
    copy_shared_assets();
    generate_tailwind();
}

fn copy_shared_assets() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let shared_main_css = Path::new(manifest_dir).join("../labs-ui/assets/main.css");
    let local_main_css = Path::new(manifest_dir).join("assets/main.css");

    println!("cargo:rerun-if-changed={}", shared_main_css.display());

    if shared_main_css.exists() {
        if let Err(e) = std::fs::copy(&shared_main_css, &local_main_css) {
            println!("cargo:warning=Failed to copy main.css from labs-ui: {e}");
        }
    }
}

fn generate_tailwind() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_input = Path::new(manifest_dir).join("tailwind.css");
    let tailwind_output = Path::new(manifest_dir).join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!("cargo:rerun-if-changed={}/src", manifest_dir);
    println!("cargo:rerun-if-changed={}/../labs-ui/src", manifest_dir);

    // Installed by `npm install` in this crate; without it the committed
    // stylesheet is used as-is.
    let tailwind_bin = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");
    if !tailwind_bin.exists() {
        println!("cargo:warning=tailwindcss not installed, keeping existing assets/tailwind.css");
        return;
    }

    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Failed to generate Tailwind CSS");
            for line in String::from_utf8_lossy(&output.stderr).lines() {
                println!("cargo:warning={line}");
            }
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {e}");
        }
    }
}
