// =============================================================================
// TTM Painting Web - Estimate Attachments
// =============================================================================
// Files picked on the estimate form stay in the browser. They are listed back
// to the visitor but never leave the device: the booking hand-off only carries
// scalar fields.
// =============================================================================

use uuid::Uuid;
use wasm_bindgen::JsValue;

/// MIME types offered by the file picker.
///
/// The picker filter is advisory only; drag-and-drop can deliver anything.
pub const ACCEPTED_MIME_TYPES: [&str; 4] = [
    "image/png",
    "image/jpeg",
    "image/heic",
    "application/pdf",
];

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_MIME_TYPES.join(",")
}

/// Whether a MIME type is on the picker's allow-list.
pub fn is_accepted_mime(mime_type: &str) -> bool {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    ACCEPTED_MIME_TYPES.contains(&mime_type.as_str())
}

/// A locally selected file.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    /// Stable key for list rendering; the same file may be picked twice.
    pub id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// `blob:` URL pointing at the file contents inside this page.
    pub object_url: String,
}

impl Attachment {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size: u64,
        object_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            object_url: object_url.into(),
        }
    }

    /// Wrap a picked browser file, creating an object URL for its contents.
    pub fn from_file(file: &web_sys::File) -> Result<Self, JsValue> {
        let object_url = web_sys::Url::create_object_url_with_blob(file)?;
        Ok(Self::new(file.name(), file.type_(), file.size() as u64, object_url))
    }

    /// Read every file out of a picker/drop `FileList`, skipping entries the
    /// browser refuses to reference.
    pub fn from_file_list(files: &web_sys::FileList) -> Vec<Self> {
        (0..files.length())
            .filter_map(|index| files.get(index))
            .filter_map(|file| match Self::from_file(&file) {
                Ok(attachment) => Some(attachment),
                Err(err) => {
                    log::warn!("Could not reference file {}: {:?}", file.name(), err);
                    None
                }
            })
            .collect()
    }

    /// Whether this file matches the advisory picker filter.
    pub fn matches_picker_filter(&self) -> bool {
        is_accepted_mime(&self.mime_type)
    }

    /// Release the object URL. Only valid in a browser.
    pub fn revoke(&self) {
        let _ = web_sys::Url::revoke_object_url(&self.object_url);
    }
}
