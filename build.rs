fn main() {
    // Capture Git values during compilation (not at runtime)
    let git_hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_default();

    let git_date = std::process::Command::new("git")
        .args(["log", "-1", "--format=%ci"])
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_default();

    let or_unknown = |value: String| if value.is_empty() { "unknown".to_string() } else { value };

    // Embed these values as constants in the binary
    println!("cargo:rustc-env=GIT_HASH={}", or_unknown(git_hash));
    println!("cargo:rustc-env=GIT_DATE={}", or_unknown(git_date));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
