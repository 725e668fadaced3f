//! Extraction tests against captured catalog markup
use librivox_catalog_lib::{ErrorKind, ParsingError, extract_album_detail, extract_album_list};
use proptest::prelude::*;

const SEARCH_RESULTS: &str = include_str!("fixtures/search_results.html");
const ALBUM_PAGE: &str = include_str!("fixtures/album_page.html");

fn result_block(index: usize) -> String {
    format!(
        r#"<li class="catalog-result">
            <a href="https://librivox.org/album-{index}/" class="book-cover"><img src="https://archive.org/{index}.jpg"></a>
            <div class="result-data">
                <h3><a href="https://librivox.org/album-{index}/">Album {index}</a></h3>
                <p class="book-author"><a href="/author/{index}">Author {index}</a> (read by Reader {index})</p>
                <p class="book-meta">Complete | Solo | English</p>
            </div>
            <div class="download-btn"><a href="https://archive.org/{index}.zip">Download</a><span>{index}MB</span></div>
        </li>"#
    )
}

#[test]
fn search_results_fixture_extracts_in_document_order() {
    let albums = extract_album_list(SEARCH_RESULTS).expect("fixture parses");

    let ids: Vec<&str> = albums.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "moby-dick-by-herman-melville",
            "short-poetry-collection-001",
            "die-verwandlung-by-franz-kafka",
        ]
    );

    let moby = &albums[0];
    assert_eq!(moby.title, "Moby Dick, or the Whale");
    assert_eq!(moby.author.name, "Herman MELVILLE");
    assert_eq!(moby.status, "Complete");
    assert_eq!(moby.project_type, "Solo");
    assert_eq!(moby.language, "English");
    assert_eq!(moby.size, "1.1GB");
    assert_eq!(
        moby.download_url,
        "https://www.archive.org/download/moby_dick_librivox/moby_dick_librivox_64kb_mp3.zip"
    );

    assert_eq!(albums[1].author.name, "Various");
    assert_eq!(albums[1].project_type, "Group");
}

#[test]
fn single_segment_meta_line_leaves_type_and_language_empty() {
    let albums = extract_album_list(SEARCH_RESULTS).unwrap();
    let kafka = &albums[2];

    assert_eq!(kafka.status, "In progress");
    assert_eq!(kafka.project_type, "");
    assert_eq!(kafka.language, "");
}

#[test]
fn album_page_fixture_extracts_full_record() {
    let album = extract_album_detail("the-raven-version-2-by-edgar-allan-poe", ALBUM_PAGE).unwrap();

    assert_eq!(album.id, "the-raven-version-2-by-edgar-allan-poe");
    assert_eq!(album.title, "The Raven (version 2)");
    assert_eq!(album.cover, "https://archive.org/download/raven_librivox/raven_thumb.jpg");
    assert_eq!(album.author.name, "Edgar Allan POE");
    assert_eq!(album.genre, "Poetry");
    assert_eq!(album.language, "English");
    assert_eq!(
        album.description,
        "LibriVox volunteers bring you 3 different recordings of \"The Raven\" by Edgar Allan Poe."
    );
    assert_eq!(album.duration, 1506);
    assert_eq!(album.size, "23MB");
    assert_eq!(album.catalog_date, "2006-03-07");

    let ids: Vec<&str> = album.episodes.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["01", "02", "03a"]);
    assert_eq!(album.episodes[0].title, "The Raven (read by Alan Davis Drake)");
    assert_eq!(
        album.episodes[2].audio_url,
        "https://www.archive.org/download/raven_librivox/raven_poe_sr_64kb.mp3"
    );
    assert_eq!(album.episodes_duration(), 503 + 461 + 542);
}

#[test]
fn album_page_without_description_is_an_extraction_error() {
    let start = ALBUM_PAGE.find(r#"<div class="description">"#).unwrap();
    let end = start + ALBUM_PAGE[start..].find("</div>").unwrap() + "</div>".len();
    let page = format!("{}{}", &ALBUM_PAGE[..start], &ALBUM_PAGE[end..]);

    let err = extract_album_detail("raven", &page).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Extraction);
    assert!(matches!(err, ParsingError::RequiredElementMissing { ref rule, .. } if rule == "description"));
}

#[test]
fn album_page_without_container_is_an_extraction_error() {
    let page = ALBUM_PAGE.replace(r#"class="page book-page""#, r#"class="book-page""#);
    let err = extract_album_detail("raven", &page).unwrap_err();
    assert_eq!(err.rule(), Some("page_container"));
}

#[test]
fn album_page_with_bad_running_time_is_a_parse_error() {
    let page = ALBUM_PAGE.replace("<dd>00:25:06</dd>", "<dd>25 minutes</dd>");
    let err = extract_album_detail("raven", &page).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn block_without_download_link_fails_the_whole_list() {
    let broken = result_block(2).replace(r#"<a href="https://archive.org/2.zip">Download</a>"#, "");
    let fragment = format!("{}{}{}", result_block(1), broken, result_block(3));

    let err = extract_album_list(&fragment).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Extraction);
    assert_eq!(err.rule(), Some("download_link"));
}

proptest! {
    #[test]
    fn list_extraction_preserves_count_and_order(count in 0usize..24) {
        let fragment: String = (0..count).map(result_block).collect();
        let albums = extract_album_list(&fragment).unwrap();

        prop_assert_eq!(albums.len(), count);
        for (index, album) in albums.iter().enumerate() {
            prop_assert_eq!(&album.id, &format!("album-{index}"));
            prop_assert_eq!(&album.author.name, &format!("Author {index}"));
        }
    }

    #[test]
    fn list_extraction_is_deterministic(count in 1usize..12) {
        let fragment: String = (0..count).map(result_block).collect();

        let first = extract_album_list(&fragment).unwrap();
        let second = extract_album_list(&fragment).unwrap();
        prop_assert_eq!(first, second);
    }
}
