#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    res.set("FileDescription", "drilllog CLI")
        .set("ProductName", "drilllog")
        .set("OriginalFilename", "drilllog.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"));

    if let Err(e) = res.compile() {
        println!("cargo:warning=Failed to embed Windows resources: {e}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
