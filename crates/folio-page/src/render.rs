use folio_core::escape::escape;
use folio_core::ProjectRecord;

/// Render one project record as a display card.
///
/// Every field passes through [`escape`] before insertion — records originate
/// from arbitrary user input, and this is the only injection barrier. The
/// title link opens in a new context with opener and referrer isolation.
/// Inserting the card anywhere is the caller's job.
pub fn project_card(record: &ProjectRecord) -> String {
    let name = escape(&record.name);
    let url = escape(&record.url);
    let img = escape(&record.img);
    let desc = escape(&record.desc);
    let mut out = String::with_capacity(256);
    out.push_str("<article class=\"project-item reveal show\">\n");
    out.push_str("  <div class=\"project-info\">\n");
    out.push_str(&format!(
        "    <h3><a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{name}</a></h3>\n"
    ));
    out.push_str(&format!("    <p>{desc}</p>\n"));
    out.push_str("  </div>\n");
    out.push_str("  <div class=\"project-img\">\n");
    out.push_str(&format!("    <img src=\"{img}\" alt=\"{name}\">\n"));
    out.push_str("  </div>\n");
    out.push_str("</article>");
    out
}
