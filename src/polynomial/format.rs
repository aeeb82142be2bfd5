use std::fmt::{self, Write};

/*
    Terms arrive as (power, coefficient) in ascending power order.
    [5, 0, 2, -3] -> (0, 5), (2, 2), (3, -3) -> "5 + 2*x^2 - 3*x^3"

    The sign of each coefficient picks the joiner (" + " or " - "), the
    magnitude is written on its own. A leading negative term gets a bare "-".
*/
pub(crate) fn write_terms<W, I>(out: &mut W, terms: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = (usize, f64)>,
{
    let mut first = true;

    for (power, coeff) in terms.into_iter().filter(|(_, coeff)| *coeff != 0.0) {
        let negative = coeff < 0.0;
        match (first, negative) {
            (true, true) => out.write_char('-')?,
            (true, false) => {}
            (false, true) => out.write_str(" - ")?,
            (false, false) => out.write_str(" + ")?,
        }
        first = false;

        write_term(out, power, coeff.abs())?;
    }

    if first {
        out.write_char('0')?;
    }

    Ok(())
}

fn write_term<W: Write>(out: &mut W, power: usize, magnitude: f64) -> fmt::Result {
    if power == 0 {
        return write!(out, "{}", magnitude);
    }

    // 1*x^k is just x^k
    if magnitude != 1.0 {
        write!(out, "{}*", magnitude)?;
    }

    match power {
        1 => out.write_char('x'),
        _ => write!(out, "x^{}", power),
    }
}
