use thiserror::Error;

use crate::utils::url::Url;

/// Path extension of the resources playable through the `hang` transport.
pub const HANG_EXTENSION: &str = "hang";

/// Media type identifying a `hang` resource when it has no recognizable extension.
pub const HANG_MIME_TYPE: &str = "video/hang";

/// Scheme of compound URLs encoding both a relay and a broadcast name, e.g.
/// `moq+hang://relay.moq.dev/anon/room/feed`.
pub const MOQ_HANG_SCHEME: &str = "moq+hang";

/// Returns `true` if the resource given can be played by a `HangPlayback`.
///
/// That is the case if its path ends with the `.hang` extension, if it uses the
/// `moq+hang` scheme, or if `mime_type` is the `hang` media type.
pub fn can_play(resource: &str, mime_type: Option<&str>) -> bool {
    if mime_type.is_some_and(|m| m.trim().eq_ignore_ascii_case(HANG_MIME_TYPE)) {
        return true;
    }
    let url = Url::new(resource.trim().to_owned());
    url.extension() == HANG_EXTENSION || url.scheme() == Some(MOQ_HANG_SCHEME)
}

/// Where a transport client should connect to play a given source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectTarget {
    /// URL of the relay the client connects to.
    url: String,
    /// Name of the broadcast to subscribe to. Empty when the URL alone designates it.
    broadcast_path: String,
}

impl ConnectTarget {
    /// Build the `ConnectTarget` corresponding to the `source` resource identifier.
    ///
    /// Most sources are directly the relay URL. `moq+hang://` ones are split in
    /// two: the host and the first path segment form the relay (reached through
    /// `https`), the remaining segments form the broadcast name:
    ///
    /// `moq+hang://relay.moq.dev/anon/room/feed` => `https://relay.moq.dev/anon` + `room/feed`
    pub fn resolve(source: &str) -> Result<Self, SourceError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(SourceError::Empty);
        }
        let url = Url::new(source.to_owned());
        if !url.is_absolute() {
            return Err(SourceError::NotAbsolute(source.to_owned()));
        }
        if url.scheme() != Some(MOQ_HANG_SCHEME) {
            return Ok(Self {
                url: url.take(),
                broadcast_path: String::new(),
            });
        }

        let mut segments = url.without_scheme().split('/');
        let host = segments
            .next()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| SourceError::MissingRelayHost(source.to_owned()))?;
        let relay_url = match segments.next() {
            Some(prefix) => format!("https://{host}/{prefix}"),
            None => format!("https://{host}"),
        };
        let broadcast_path = segments.collect::<Vec<_>>().join("/");
        Ok(Self {
            url: relay_url,
            broadcast_path,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn broadcast_path(&self) -> &str {
        &self.broadcast_path
    }
}

/// Reasons why a source cannot be used.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SourceError {
    #[error("No source was provided.")]
    Empty,
    #[error("The source `{0}` is not an absolute URL.")]
    NotAbsolute(String),
    #[error("The source `{0}` has no relay host.")]
    MissingRelayHost(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://x/demo.hang", None, true)]
    #[case("http://localhost:4443/demo/bbb.hang", Some(""), true)]
    #[case("https://relay.example.com/live.hang?jwt=abc", None, true)]
    #[case("moq+hang://relay.moq.dev/anon/room/feed", None, true)]
    #[case("http://x/demo.m3u8", None, false)]
    #[case("http://x/demo.hang.mp4", None, false)]
    #[case("http://x/hang", None, false)]
    #[case("http://x/stream", Some("video/hang"), true)]
    #[case("http://x/stream", Some(" VIDEO/HANG "), true)]
    #[case("http://x/stream", Some("application/x-mpegURL"), false)]
    #[case("", None, false)]
    fn test_can_play(#[case] resource: &str, #[case] mime: Option<&str>, #[case] expected: bool) {
        assert_eq!(can_play(resource, mime), expected);
    }

    #[test]
    fn test_resolve_plain_url() {
        let target = ConnectTarget::resolve(" http://localhost:4443/demo/bbb.hang ").unwrap();
        assert_eq!(target.url(), "http://localhost:4443/demo/bbb.hang");
        assert_eq!(target.broadcast_path(), "");
    }

    #[test]
    fn test_resolve_moq_hang_url() {
        let target = ConnectTarget::resolve("moq+hang://relay.moq.dev/anon/room123/my-feed").unwrap();
        assert_eq!(target.url(), "https://relay.moq.dev/anon");
        assert_eq!(target.broadcast_path(), "room123/my-feed");

        let target = ConnectTarget::resolve("moq+hang://relay.moq.dev/anon").unwrap();
        assert_eq!(target.url(), "https://relay.moq.dev/anon");
        assert_eq!(target.broadcast_path(), "");

        let target = ConnectTarget::resolve("moq+hang://relay.moq.dev").unwrap();
        assert_eq!(target.url(), "https://relay.moq.dev");
        assert_eq!(target.broadcast_path(), "");
    }

    #[test]
    fn test_resolve_moq_hang_url_keeps_empty_segments() {
        let target = ConnectTarget::resolve("moq+hang://relay.moq.dev/").unwrap();
        assert_eq!(target.url(), "https://relay.moq.dev/");
        assert_eq!(target.broadcast_path(), "");

        let target = ConnectTarget::resolve("moq+hang://relay.moq.dev//room").unwrap();
        assert_eq!(target.url(), "https://relay.moq.dev/");
        assert_eq!(target.broadcast_path(), "room");

        let target = ConnectTarget::resolve("moq+hang://relay.moq.dev/anon/room/").unwrap();
        assert_eq!(target.url(), "https://relay.moq.dev/anon");
        assert_eq!(target.broadcast_path(), "room/");
    }

    #[test]
    fn test_resolve_errors() {
        assert_eq!(ConnectTarget::resolve(""), Err(SourceError::Empty));
        assert_eq!(ConnectTarget::resolve("   "), Err(SourceError::Empty));
        assert_eq!(
            ConnectTarget::resolve("/demo/bbb.hang"),
            Err(SourceError::NotAbsolute("/demo/bbb.hang".to_owned()))
        );
        assert_eq!(
            ConnectTarget::resolve("moq+hang:///"),
            Err(SourceError::MissingRelayHost("moq+hang:///".to_owned()))
        );
    }
}
