/// Resolves the URL of a recipe picture.
///
/// A recipe with its own image is served from `assets_base`. Otherwise a
/// Picsum placeholder is seeded from the title so the same recipe always
/// gets the same picture.
pub fn image_url(image: Option<&str>, title: &str, assets_base: &str) -> String {
    if let Some(image) = image.filter(|i| !i.is_empty()) {
        return format!("{}/{image}", assets_base.trim_end_matches('/'));
    }

    let mut seed = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                seed.push('-');
            }
            in_whitespace = true;
        } else {
            seed.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    format!(
        "https://picsum.photos/seed/{}/400/300",
        urlencoding::encode(&seed)
    )
}
