use crate::errors::FetchError;
use url::Url;

/// Appends `params` to `base` as a form-encoded query string.
///
/// Parameters already present on `base` are kept. An empty `params` returns
/// `base` normalised but otherwise unchanged.
pub fn build_url<I, K, V>(base: &str, params: I) -> Result<String, FetchError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = Url::parse(base)?;
    if url.cannot_be_a_base() {
        return Err(FetchError::MalformedUrl(format!(
            "{base} cannot carry query parameters"
        )));
    }

    let mut params = params.into_iter().peekable();
    if params.peek().is_some() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url.into())
}
