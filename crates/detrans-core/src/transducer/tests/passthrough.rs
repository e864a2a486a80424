use super::*;

#[test]
fn test_markup_preserved() {
    let engine = default_engine();
    assert_eq!(convert(&engine, "<b>privet</b>"), "<b>привет</b>");
    assert_eq!(
        convert(&engine, r#"<a href="shchi">shchi</a>"#),
        r#"<a href="shchi">щи</a>"#
    );
}

#[test]
fn test_unterminated_markup_copied_to_end() {
    let engine = default_engine();
    assert_eq!(convert(&engine, "privet <a href"), "привет <a href");
}

#[test]
fn test_url_preserved() {
    let engine = default_engine();
    assert_eq!(
        convert(&engine, "see www.example.com privet"),
        "сее www.example.com привет"
    );
    assert_eq!(
        convert(&engine, "https://mail.ru/inbox c"),
        "https://mail.ru/inbox ц"
    );
    assert_eq!(convert(&engine, "http://ya.ru"), "http://ya.ru");
}

#[test]
fn test_url_prefix_is_case_sensitive() {
    let engine = default_engine();
    assert_eq!(convert(&engine, "WWW.site"), "ВВВ.сите");
}

#[test]
fn test_entity_preserved() {
    let engine = default_engine();
    assert_eq!(convert(&engine, "&amp; privet"), "&amp; привет");
    assert_eq!(convert(&engine, "a&lt;b"), "а&lt;б");
}

#[test]
fn test_unterminated_entity_copied_to_end() {
    let engine = default_engine();
    assert_eq!(convert(&engine, "&nbsp privet"), "&nbsp privet");
}

#[test]
fn test_apostrophe_entity_normalized() {
    let engine = default_engine();
    let out = convert(&engine, "don&apos;t");
    assert_eq!(out, "доньт");
    assert!(!out.contains("&apos;"));
    assert_eq!(convert(&engine, "ob&apos;&apos;ekt"), "объект");
}

#[test]
fn test_apostrophe_normalized_inside_markup() {
    let engine = default_engine();
    assert_eq!(
        convert(&engine, "<a title=&apos;x&apos;>"),
        "<a title='x'>"
    );
}

#[test]
fn test_markup_rule_disabled() {
    let mut settings = Settings::default();
    settings.passthrough.markup = false;
    let engine = engine_with(&settings);
    assert_eq!(convert(&engine, "<b>"), "<б>");
}

#[test]
fn test_url_rule_disabled() {
    let mut settings = Settings::default();
    settings.passthrough.url = false;
    let engine = engine_with(&settings);
    assert_eq!(convert(&engine, "www.ru"), "ввв.ру");
}

#[test]
fn test_custom_url_prefix() {
    let mut settings = Settings::default();
    settings.passthrough.url_prefixes = vec!["ftp://".to_string()];
    let engine = engine_with(&settings);
    assert_eq!(convert(&engine, "ftp://host a"), "ftp://host а");
    assert_eq!(convert(&engine, "www.ru"), "ввв.ру");
}

#[test]
fn test_entity_rule_disabled() {
    let mut settings = Settings::default();
    settings.passthrough.entity = false;
    let engine = engine_with(&settings);
    assert_eq!(convert(&engine, "&amp;"), "&амп;");
}

#[test]
fn test_apostrophe_normalization_disabled() {
    let mut settings = Settings::default();
    settings.normalize.apostrophe_entity = false;
    let engine = engine_with(&settings);
    assert_eq!(convert(&engine, "don&apos;t"), "дон&apos;т");
}

#[test]
fn test_rule_priority_markup_before_url() {
    let engine = default_engine();
    // The tag claims the position first; the URL inside it is never scanned.
    assert_eq!(
        convert(&engine, "<www.x> da"),
        "<www.x> да"
    );
}
