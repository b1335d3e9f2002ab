use url::Url;

/// Builds absolute `self` and `next` links from the public base URL.
#[derive(Clone, Debug)]
pub struct LinkBuilder {
    base: Url,
}

impl LinkBuilder {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Absolute URL of a single record, e.g. `{base}/boats/7`.
    pub fn resource(&self, collection: &str, id: i32) -> String {
        self.with_segments(&[collection, &id.to_string()]).into()
    }

    /// Absolute URL of the page following `cursor` in a collection.
    pub fn next_page(&self, collection: &str, cursor: i32) -> String {
        let mut url = self.with_segments(&[collection]);
        url.query_pairs_mut()
            .append_pair("cursor", &cursor.to_string());

        url.into()
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);

        // Base URLs that cannot carry a path are rejected when the config is parsed.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }
}
