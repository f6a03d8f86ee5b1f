use crate::error::GenError;
use crate::generators::ascii::gen_alpha;
use crate::sampler::Sampler;
use crate::tables::Tables;

pub fn gen_html(sampler: &mut Sampler, tables: &Tables, length: usize) -> Result<String, GenError> {
    let payload = gen_alpha(sampler, length)?;
    let tag = sampler.choice(&tables.html_tags)?;
    Ok(format!("<{tag}>{payload}</{tag}>"))
}

fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Tiles the lorem-ipsum text into `paragraphs` lines of `words` words each.
/// `words == 0` means one full copy of the source text per paragraph.
pub fn gen_ipsum(tables: &Tables, words: usize, paragraphs: usize) -> Result<String, GenError> {
    if paragraphs == 0 {
        return Err(GenError::invalid("paragraphs must be greater than zero"));
    }
    let source: Vec<&str> = tables.lorem_ipsum.split_whitespace().collect();
    if source.is_empty() {
        return Err(GenError::invalid("lorem ipsum source text is empty"));
    }
    let words = if words == 0 { source.len() } else { words };

    let total = words.checked_mul(paragraphs).ok_or_else(|| {
        GenError::invalid(format!("{words} words by {paragraphs} paragraphs is too large"))
    })?;
    let tiled: Vec<&str> = source.iter().copied().cycle().take(total).collect();
    let mut result = String::new();
    for chunk in tiled.chunks(words) {
        let joined = chunk.join(" ");
        let sentence = joined.strip_suffix([',', '.']).unwrap_or(joined.as_str());
        let fragments: Vec<String> = sentence
            .split(". ")
            .map(|fragment| format!("{}.", capitalize(fragment)))
            .collect();
        result.push_str(&fragments.join(" "));
        result.push('\n');
    }
    Ok(result)
}
