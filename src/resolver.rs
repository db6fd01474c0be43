const BASE_URL: &str = "https://www.osta.ee/kategooria/";

/// Build the listing URL for a category path such as `arvutid/monitorid`.
/// The category is not validated; a nonexistent one yields a URL that
/// produces empty results downstream.
pub fn category_url(category: &str) -> String {
    format!("{}{}", BASE_URL, category.trim_start_matches('/'))
}

/// Page 1 is the category URL itself, later pages hang off it.
pub fn page_url(category_url: &str, page: usize) -> String {
    if page <= 1 {
        category_url.to_string()
    } else {
        format!("{category_url}/page-{page}")
    }
}

/// Output filename used when none is given on the command line.
pub fn default_output_filename(category: &str) -> String {
    let slug = category
        .trim_matches('/')
        .replace('/', "-");
    format!("{slug}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_url_appends_path_to_base() {
        assert_eq!(
            category_url("arvutid/monitorid"),
            "https://www.osta.ee/kategooria/arvutid/monitorid"
        );
    }

    #[test]
    fn category_url_strips_leading_slash() {
        assert_eq!(
            category_url("/arvutid/sulearvutid"),
            "https://www.osta.ee/kategooria/arvutid/sulearvutid"
        );
    }

    #[test]
    fn first_page_is_the_category_url() {
        let url = category_url("arvutid/monitorid");
        assert_eq!(page_url(&url, 1), url);
    }

    #[test]
    fn later_pages_get_a_page_suffix() {
        let url = category_url("arvutid/monitorid");
        assert_eq!(
            page_url(&url, 3),
            "https://www.osta.ee/kategooria/arvutid/monitorid/page-3"
        );
    }

    #[test]
    fn default_filename_derives_from_category() {
        assert_eq!(
            default_output_filename("arvutid/monitorid"),
            "arvutid-monitorid.json"
        );
        assert_eq!(default_output_filename("mobiilid"), "mobiilid.json");
    }
}
