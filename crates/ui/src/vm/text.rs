/// Category prefixes the question source puts in front of subcategories.
const CATEGORY_PREFIXES: [&str; 2] = ["Entertainment:", "Science:"];

/// Decode the HTML entities the question source embeds in its text.
///
/// Handles the common named entities plus decimal and hex character
/// references. Anything unrecognized is kept verbatim. Single pass, so
/// `&amp;quot;` decodes to `&quot;`, not `"`.
#[must_use]
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        let decoded = candidate
            .find(';')
            .filter(|&end| end > 1 && end <= 10)
            .and_then(|end| decode_one(&candidate[1..end]).map(|ch| (ch, end)));

        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_one(entity: &str) -> Option<char> {
    if let Some(numeric) = entity.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    let ch = match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "shy" => '\u{ad}',
        "deg" => '°',
        "eacute" => 'é',
        "Eacute" => 'É',
        "egrave" => 'è',
        "aacute" => 'á',
        "agrave" => 'à',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "ntilde" => 'ñ',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "auml" => 'ä',
        "Ouml" => 'Ö',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        "ccedil" => 'ç',
        "aring" => 'å',
        "oslash" => 'ø',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "laquo" => '«',
        "raquo" => '»',
        "pi" => 'π',
        "times" => '×',
        "divide" => '÷',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        _ => return None,
    };
    Some(ch)
}

/// Category label for display, without the broad source prefix.
#[must_use]
pub fn display_category(category: &str) -> String {
    let mut label = category;
    for prefix in CATEGORY_PREFIXES {
        if let Some(stripped) = label.trim_start().strip_prefix(prefix) {
            label = stripped;
        }
    }
    decode_entities(label.trim())
}

/// Letter shown next to the choice at `index` (`0` is `A`).
#[must_use]
pub fn choice_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|offset| *offset < 26)
        .map_or('?', |offset| char::from(b'A' + offset))
}
