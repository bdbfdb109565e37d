use std::io::BufRead;

use crate::input::InputError;
use crate::model::item::{FridgeItem, ItemId, Presence};

/// Parses `id<TAB>name[<TAB>presence]` lines.
///
/// Blank lines, `#` comments and a leading `id` header row are skipped. A missing
/// presence column means `have`.
pub fn parse_catalog_tsv(mut reader: impl BufRead) -> Result<Vec<FridgeItem>, InputError> {
    let mut items = Vec::new();
    let mut buf = String::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let id_field = fields[0].trim();
        if items.is_empty() && id_field.eq_ignore_ascii_case("id") {
            continue;
        }

        let id = id_field.parse::<u64>().map_err(|_| InputError::Parse {
            line: line_no,
            msg: format!("invalid item id '{id_field}'"),
        })?;
        let name = fields.get(1).map(|s| s.trim()).unwrap_or_default();
        if name.is_empty() {
            return Err(InputError::Parse {
                line: line_no,
                msg: format!("item {id} has no name"),
            });
        }
        let presence = match fields.get(2).map(|s| s.trim()) {
            None | Some("") => Presence::Have,
            Some(raw) => raw
                .parse::<Presence>()
                .map_err(|msg| InputError::Parse { line: line_no, msg })?,
        };

        items.push(FridgeItem {
            id: ItemId(id),
            name: name.to_string(),
            presence,
        });
    }

    Ok(items)
}
