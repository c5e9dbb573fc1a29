use std::path::{Path, PathBuf};

use base64::Engine as _;

use crate::foundation::error::{CarrosselError, CarrosselResult};

/// Fetch the raw encoded bytes behind a slide image reference.
///
/// Two reference forms are supported:
///
/// - `data:<mime>;base64,<payload>` URLs, the form produced by the image
///   provider when it hands a freshly generated background to the caller;
/// - filesystem paths, resolved against `root` when relative.
///
/// Remote `http(s)` URLs are deliberately not fetched here; transport is a
/// caller concern and the compositor must stay IO-predictable.
pub fn load_image_bytes(url: &str, root: Option<&Path>) -> CarrosselResult<Vec<u8>> {
    if url.is_empty() {
        return Err(CarrosselError::image_load("image reference is empty"));
    }

    if let Some(rest) = url.strip_prefix("data:") {
        return decode_data_url(rest);
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        return Err(CarrosselError::image_load(
            "remote URLs are not fetched by the compositor; supply a data URL or a local path",
        ));
    }

    let path = resolve_path(url, root);
    std::fs::read(&path).map_err(|e| {
        CarrosselError::image_load(format!("read image '{}': {e}", path.display()))
    })
}

fn resolve_path(url: &str, root: Option<&Path>) -> PathBuf {
    let p = Path::new(url);
    match root {
        Some(root) if p.is_relative() => root.join(p),
        _ => p.to_path_buf(),
    }
}

fn decode_data_url(rest: &str) -> CarrosselResult<Vec<u8>> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| CarrosselError::image_load("data URL has no payload separator"))?;

    if !meta.ends_with(";base64") {
        return Err(CarrosselError::image_load(
            "only base64 data URLs are supported",
        ));
    }

    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| CarrosselError::image_load(format!("decode base64 payload: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
