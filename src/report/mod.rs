pub mod json;
pub mod text;
pub mod tsv;

pub fn format_f32_6(v: f32) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
