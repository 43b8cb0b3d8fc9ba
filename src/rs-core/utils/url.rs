use std::fmt::Display;

/// Abstraction allowing to help with the handling of URLs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Url {
    inner: String,
}

impl Url {
    pub fn new(url: String) -> Self {
        Self { inner: url }
    }

    pub fn take(self) -> String {
        self.inner
    }

    pub fn get_ref(&self) -> &str {
        self.inner.as_str()
    }

    pub fn is_absolute(&self) -> bool {
        is_absolute_url(self.inner.as_bytes())
    }

    /// Returns the scheme of that URL (e.g. `https` or `moq+hang`), without
    /// the `:` separator.
    ///
    /// Returns `None` for relative URLs.
    pub fn scheme(&self) -> Option<&str> {
        if !self.is_absolute() {
            return None;
        }
        self.inner.find(':').map(|idx| &self.inner[..idx])
    }

    /// Returns everything following the `scheme://` part, or the whole URL if
    /// it is relative.
    pub fn without_scheme(&self) -> &str {
        match self.scheme() {
            Some(scheme) => &self.inner[scheme.len() + 3..],
            None => &self.inner,
        }
    }

    pub fn filename(&self) -> &str {
        let parsed = strip_query_and_fragment(&self.inner);
        let last_slash = parsed.rfind('/');
        match last_slash {
            Some(idx) => &parsed[idx + 1..],
            None => parsed,
        }
    }

    pub fn extension(&self) -> &str {
        let filename = self.filename();
        let last_dot = filename.rfind('.');
        match last_dot {
            Some(idx) => &filename[idx + 1..],
            None => "",
        }
    }
}

impl Display for Url {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_ref())
    }
}

fn strip_query_and_fragment(url: &str) -> &str {
    let parsed = match url.find('#') {
        Some(idx) => &url[0..idx],
        None => url,
    };
    match parsed.find('?') {
        Some(idx) => &parsed[0..idx],
        None => parsed,
    }
}

/// Scheme characters as allowed by RFC 3986, with the first one being a
/// letter.
fn is_absolute_url(bytes: &[u8]) -> bool {
    let mut offset = 0;
    loop {
        if bytes.len() < offset + 1 {
            return false;
        }
        let byte = bytes[offset];
        if byte.is_ascii_alphabetic()
            || (offset > 0 && (byte.is_ascii_digit() || byte == b'+' || byte == b'-' || byte == b'.'))
        {
            offset += 1;
            continue;
        } else if byte == b':' {
            if offset == 0 {
                return false;
            }
            offset += 1;
            break;
        } else {
            return false;
        }
    }

    if bytes.len() < offset + 2 {
        false
    } else {
        &bytes[offset..offset + 2] == b"//"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        let url = Url::new("http://localhost:4443/demo/bbb.hang".to_owned());
        assert_eq!(url.filename(), "bbb.hang");
        assert_eq!(url.extension(), "hang");

        let url = Url::new("https://relay.example.com/live.hang?jwt=abc#t".to_owned());
        assert_eq!(url.extension(), "hang");

        let url = Url::new("https://relay.example.com/live.hang/index".to_owned());
        assert_eq!(url.extension(), "");

        let url = Url::new("bbb".to_owned());
        assert_eq!(url.extension(), "");
    }

    #[test]
    fn test_scheme() {
        let url = Url::new("moq+hang://relay.moq.dev/anon/room".to_owned());
        assert!(url.is_absolute());
        assert_eq!(url.scheme(), Some("moq+hang"));
        assert_eq!(url.without_scheme(), "relay.moq.dev/anon/room");

        let url = Url::new("http://x/demo.hang".to_owned());
        assert_eq!(url.scheme(), Some("http"));
        assert_eq!(url.without_scheme(), "x/demo.hang");

        let url = Url::new("/demo/bbb.hang".to_owned());
        assert!(!url.is_absolute());
        assert_eq!(url.scheme(), None);
        assert_eq!(url.without_scheme(), "/demo/bbb.hang");

        assert!(!Url::new("1http://x".to_owned()).is_absolute());
        assert!(!Url::new("http:/x".to_owned()).is_absolute());
        assert!(!Url::new("://x".to_owned()).is_absolute());
    }
}
