//! Upload selection rules
//!
//! Files are matched on name and MIME hint only; contents are never
//! inspected.

/// Multipart field carrying each uploaded file
pub const UPLOAD_FIELD: &str = "documents";

/// Extensions accepted by the drop zone and the file picker
pub const ACCEPTED_EXTENSIONS: [&str; 4] = [".txt", ".doc", ".docx", ".pdf"];

const ACCEPTED_MIME_PREFIX: &str = "text/";

/// Whether a file with this name and MIME type may be uploaded
pub fn is_accepted(name: &str, mime: &str) -> bool {
    let name = name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        || mime.to_ascii_lowercase().starts_with(ACCEPTED_MIME_PREFIX)
}

/// Value for the file input's `accept` attribute
pub fn accept_attribute() -> String {
    let mut accept = vec!["text/*"];
    accept.extend(ACCEPTED_EXTENSIONS);
    accept.join(",")
}

/// A drop or picker selection split by [`is_accepted`]
#[derive(Debug)]
pub struct Selection<T> {
    /// Accepted files, in selection order
    pub accepted: Vec<T>,
    /// Names of the files that were dropped
    pub rejected: Vec<String>,
}

/// Split a selection; `describe` yields each file's `(name, mime)`
pub fn partition_selection<T, F>(files: impl IntoIterator<Item = T>, describe: F) -> Selection<T>
where
    F: Fn(&T) -> (String, String),
{
    let mut selection = Selection {
        accepted: Vec::new(),
        rejected: Vec::new(),
    };
    for file in files {
        let (name, mime) = describe(&file);
        if is_accepted(&name, &mime) {
            selection.accepted.push(file);
        } else {
            selection.rejected.push(name);
        }
    }
    selection
}
