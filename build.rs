use std::process::Command;

// Expose the nearest git tag so the shell can show a real release label;
// untagged or non-git builds fall back to the crate version at runtime.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let tag = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok());

    if let Some(tag) = tag {
        let tag = tag.trim();
        if !tag.is_empty() {
            println!("cargo:rustc-env=GIT_TAG={tag}");
        }
    }
}
