/// Format a rand amount rounded to the nearest whole rand, with thousands
/// separators: R1,234. Halves round away from zero.
pub fn format_rand(val: f64) -> String {
    let rounded = val.round();
    let negative = rounded < 0.0;
    let whole = format!("{:.0}", rounded.abs());

    let mut with_commas = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-R{with_commas}")
    } else {
        format!("R{with_commas}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_formatting() {
        assert_eq!(format_rand(1234.4), "R1,234");
        assert_eq!(format_rand(1041.67), "R1,042");
        assert_eq!(format_rand(-4560.0), "-R4,560");
        assert_eq!(format_rand(0.0), "R0");
        assert_eq!(format_rand(-0.4), "R0");
        assert_eq!(format_rand(1_000_000.0), "R1,000,000");
        assert_eq!(format_rand(999.5), "R1,000");
    }
}
