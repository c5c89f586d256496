use crate::cli::report::dump_json;
use crate::facet::FacetName;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VocabularyEntry {
    pub facet: FacetName,
    pub values: &'static [&'static str],
}

pub fn vocabularies() -> Vec<VocabularyEntry> {
    FacetName::ALL
        .into_iter()
        .map(|facet| VocabularyEntry {
            facet,
            values: facet.vocabulary(),
        })
        .collect()
}

pub fn vocab(json: bool) -> anyhow::Result<()> {
    if json {
        dump_json(&vocabularies())
    } else {
        print!("{}", render_vocabularies());
        Ok(())
    }
}

pub fn render_vocabularies() -> String {
    let mut out = String::new();
    for entry in vocabularies() {
        out.push_str(&format!("{:<15} {}\n", entry.facet, entry.values.join(", ")));
    }
    out
}
