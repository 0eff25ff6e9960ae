use std::fs;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to write page {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Somewhere rendered markup is shown.
pub trait Surface {
    /// Replace everything currently displayed with `markup`
    fn replace_content(&mut self, markup: &str) -> Result<(), SurfaceError>;
}

/// An HTML page on disk holding a single element, identified by `element_id`, whose content is
/// the latest markup. The page reloads itself so an open browser tab follows along.
pub struct PageFile {
    path: PathBuf,
    element_id: String,
}

impl PageFile {
    /// Seconds between browser reloads
    const REFRESH: u32 = 1;

    pub fn new(path: impl Into<PathBuf>, element_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            element_id: element_id.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn document(&self, markup: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta http-equiv=\"refresh\" content=\"{refresh}\">\n\
             <title>Conway's Game of Life</title>\n\
             </head>\n\
             <body>\n\
             <div id=\"{id}\">{markup}</div>\n\
             </body>\n\
             </html>\n",
            refresh = Self::REFRESH,
            id = self.element_id,
        )
    }
}

impl Surface for PageFile {
    fn replace_content(&mut self, markup: &str) -> Result<(), SurfaceError> {
        let page = self.document(markup);

        // Write next to the target and rename, so a reload never sees half a page
        let tmp = self.path.with_extension("html.tmp");

        let wrap = |source| SurfaceError::Write {
            path: self.path.clone(),
            source,
        };

        fs::write(&tmp, page).map_err(wrap)?;
        fs::rename(&tmp, &self.path).map_err(wrap)?;

        trace!(path = ?self.path, bytes = markup.len(), "page written");

        Ok(())
    }
}

/// Keeps every frame it is handed, oldest first.
#[derive(Default, Debug)]
pub struct Frames {
    pub frames: Vec<String>,
}

impl Frames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Surface for Frames {
    fn replace_content(&mut self, markup: &str) -> Result<(), SurfaceError> {
        self.frames.push(markup.to_owned());

        Ok(())
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn replace_content(&mut self, markup: &str) -> Result<(), SurfaceError> {
        (**self).replace_content(markup)
    }
}
