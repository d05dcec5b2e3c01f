fn main() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();

    let config = cbindgen::Config {
        language: cbindgen::Language::C,
        include_guard: Some("HTTP2CURL_H".to_string()),
        ..cbindgen::Config::default()
    };

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
        .expect("unable to generate C bindings")
        .write_to_file("include/http2curl.h");

    println!("cargo:rerun-if-changed=src");
}
