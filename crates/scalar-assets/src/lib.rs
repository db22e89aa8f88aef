//! Bundled assets for Scalar UI.
//!
//! The page template lives in `assets/` and is compiled into the binary via
//! `rust-embed`, so a release build carries a fixed, versioned copy that
//! cannot change underneath a running process.

use std::borrow::Cow;

/// Embedded assets.
#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
#[prefix = ""]
struct Assets;

/// Path of the API reference page template.
pub const PAGE_TEMPLATE: &str = "api-reference.html";

/// Get an asset by path (relative to `assets/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get an asset as UTF-8 text.
///
/// Returns `None` if the asset is missing or not valid UTF-8.
pub fn get_text(path: &str) -> Option<String> {
    let data = get(path)?;
    String::from_utf8(data.into_owned()).ok()
}

/// Iterate all available asset paths.
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Return the MIME type string for the given file path.
///
/// YAML documents are reported as `application/x-yaml`, which is what API
/// tooling expects; `mime_guess` knows them only as `text/x-yaml`.
pub fn mime_for(path: &str) -> Cow<'static, str> {
    let extension = path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    if matches!(extension.as_deref(), Some("yaml" | "yml")) {
        return Cow::Borrowed("application/x-yaml");
    }
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Cow::Owned(mime.essence_str().to_owned())
}
