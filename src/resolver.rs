use std::fmt;
use std::path::PathBuf;

use tracing::warn;

pub const MUSCLES_NAMESPACE: &str = "muscles";
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];
pub const UNSUPPORTED_IMAGE: &str = "Unsupported or missing image file.";

/// Result of one render step. Problems stay attached to the item they
/// belong to so the rest of the page still renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome<T> {
    Ready(T),
    Warning(String),
    Error(String),
}

/// Where assets are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRoot {
    Directory(PathBuf),
    Url(String),
}

/// A resolved asset reference handed to the output layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    Path(PathBuf),
    Url(String),
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetRef::Path(path) => write!(f, "{}", path.display()),
            AssetRef::Url(url) => f.write_str(url),
        }
    }
}

fn segments<'a>(parts: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
    parts
        .iter()
        .map(|part| part.trim_matches('/'))
        .filter(|part| !part.is_empty())
}

impl AssetRoot {
    /// Joins folder and file onto the root, skipping empty segments.
    pub fn join(&self, folder: &str, file: &str) -> AssetRef {
        let parts = [folder, file];
        match self {
            AssetRoot::Directory(root) => {
                let mut path = root.clone();
                for segment in segments(&parts) {
                    path.push(segment);
                }
                AssetRef::Path(path)
            }
            AssetRoot::Url(base) => {
                let mut url = base.trim_end_matches('/').to_string();
                for segment in segments(&parts) {
                    url.push('/');
                    url.push_str(segment);
                }
                AssetRef::Url(url)
            }
        }
    }

    /// Joins and, for local directories, checks that the file exists.
    /// URL roots are trusted; the asset server owns existence there.
    pub fn resolve(&self, folder: &str, file: &str) -> RenderOutcome<AssetRef> {
        let asset = self.join(folder, file);
        if let AssetRef::Path(path) = &asset {
            if !path.is_file() {
                warn!("asset not found: {}", path.display());
                return RenderOutcome::Error(format!("Image not found: {}", path.display()));
            }
        }
        RenderOutcome::Ready(asset)
    }
}

pub fn has_allowed_extension(file: &str) -> bool {
    let file = file.to_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .iter()
        .any(|ext| file.ends_with(*ext))
}

/// Resolves an outfit image. Only jpg/jpeg/png files are looked up.
pub fn resolve_outfit_image(root: &AssetRoot, folder: &str, file: &str) -> RenderOutcome<AssetRef> {
    if !has_allowed_extension(file) {
        warn!("unsupported outfit image {:?} in folder {:?}", file, folder);
        return RenderOutcome::Warning(UNSUPPORTED_IMAGE.to_string());
    }
    root.resolve(folder, file)
}

/// Canonical folder for a muscle group: always exactly one `muscles/` prefix.
pub fn normalize_muscle_folder(folder: &str) -> String {
    let mut rest = folder.trim_matches('/');
    loop {
        if rest == MUSCLES_NAMESPACE {
            rest = "";
        } else if let Some(stripped) = rest.strip_prefix("muscles/") {
            rest = stripped.trim_start_matches('/');
        } else {
            break;
        }
    }

    if rest.is_empty() {
        MUSCLES_NAMESPACE.to_string()
    } else {
        format!("{}/{}", MUSCLES_NAMESPACE, rest)
    }
}

/// Resolves a muscle-group, sub-muscle or exercise asset. An absent file
/// yields `None`; any present name is accepted regardless of extension.
pub fn resolve_muscle_asset(
    root: &AssetRoot,
    group_folder: &str,
    file: Option<&str>,
) -> Option<RenderOutcome<AssetRef>> {
    let file = file.filter(|f| !f.trim().is_empty())?;
    Some(root.resolve(&normalize_muscle_folder(group_folder), file))
}
