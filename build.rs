#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // L'icona è opzionale: senza res/rhabitlog.ico si compila comunque
    if !std::path::Path::new("res/rhabitlog.ico").exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon("res/rhabitlog.ico")
        .set("FileDescription", "rHabitLog CLI")
        .set("ProductName", "rHabitLog")
        .set("OriginalFilename", "rhabitlog.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
