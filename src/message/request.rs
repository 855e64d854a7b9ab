use super::HeadError;

const SP: char = ' ';

/// Read-only view over the head of a parsed request.
///
/// The method and path tokens are subslices of one shared buffer with exactly
/// one byte between them, so the dispatch lookup key `"<METHOD> <path>"` is a
/// plain subslice as well and costs no allocation.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    head: &'a str,
    method_end: usize,
    path_end: usize,
}

impl<'a> Request<'a> {
    /// Locates the method and path tokens in `head`
    /// (`"<METHOD> <path>[ <rest>]"`). The tokens themselves are taken as-is;
    /// validating them is the parser's job, not ours.
    pub fn from_head(head: &'a str) -> Result<Self, HeadError> {
        let method_end = match head.find(SP) {
            Some(0) | None => return Err(HeadError::new("request head is missing a method token")),
            Some(i) => i,
        };
        let rest = &head[method_end + 1..];
        let path_len = rest.find(SP).unwrap_or_else(|| rest.len());
        if path_len == 0 {
            return Err(HeadError::new("request head is missing a path token"));
        }
        Ok(Self {
            head,
            method_end,
            path_end: method_end + 1 + path_len,
        })
    }

    pub fn method(&self) -> &'a str {
        &self.head[..self.method_end]
    }

    pub fn path(&self) -> &'a str {
        &self.head[self.method_end + 1..self.path_end]
    }

    /// The contiguous `"<METHOD> <path>"` span covering both tokens.
    pub fn lookup_key(&self) -> &'a str {
        &self.head[..self.path_end]
    }
}
