//! Parsing of line-based binding scripts.
//!
//! Every line holds one statement. A `#` starts a comment that runs
//! until the end of the line.

use eyre::WrapErr;

/// A single statement of a binding script.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Statement<'a> {
    /// `set <property> <type> <literal>`
    Set {
        property: &'a str,
        ty: &'a str,
        literal: &'a str,
    },
    /// `inc <property>`
    Inc { property: &'a str },
    /// `bind <field> <property>`
    Bind { field: &'a str, property: &'a str },
    /// `adapter <source> <destination>`
    Adapter {
        source: &'a str,
        destination: &'a str,
    },
    Passthrough,
    Start,
    Stop,
    Refresh,
    Dump,
}

/// A parsed statement with its 1-based line number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<'a> {
    pub number: usize,
    pub statement: Statement<'a>,
}

/// Parses all statements of a script, skipping blank lines.
pub fn parse(source: &str) -> eyre::Result<Vec<Line<'_>>> {
    let mut lines = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let number = idx + 1;
        if let Some(statement) =
            parse_line(line).wrap_err_with(|| format!("syntax error on line {number}"))?
        {
            lines.push(Line { number, statement });
        }
    }

    Ok(lines)
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn operands<'a, const N: usize>(op: &str, rest: &'a str) -> eyre::Result<[&'a str; N]> {
    let words: Vec<&str> = rest.split_whitespace().collect();
    words.try_into().map_err(|words: Vec<&str>| {
        eyre::eyre!("'{op}' takes {N} operand(s), got {}", words.len())
    })
}

fn parse_line(line: &str) -> eyre::Result<Option<Statement<'_>>> {
    let line = line.split_once('#').map_or(line, |(code, _)| code).trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (op, rest) = split_word(line);
    let statement = match op {
        "set" => {
            let (property, rest) = split_word(rest);
            let (ty, literal) = split_word(rest);
            if property.is_empty() || ty.is_empty() {
                eyre::bail!("'set' takes a property, a type and a literal");
            }

            Statement::Set {
                property,
                ty,
                literal,
            }
        }
        "inc" => {
            let [property] = operands(op, rest)?;
            Statement::Inc { property }
        }
        "bind" => {
            let [field, property] = operands(op, rest)?;
            Statement::Bind { field, property }
        }
        "adapter" => {
            let [source, destination] = operands(op, rest)?;
            Statement::Adapter {
                source,
                destination,
            }
        }

        "passthrough" | "start" | "stop" | "refresh" | "dump" => {
            operands::<0>(op, rest)?;
            match op {
                "passthrough" => Statement::Passthrough,
                "start" => Statement::Start,
                "stop" => Statement::Stop,
                "refresh" => Statement::Refresh,
                _ => Statement::Dump,
            }
        }

        _ => eyre::bail!("unknown command '{op}'"),
    };

    Ok(Some(statement))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements() {
        let lines = parse(
            "# A session\n\
             set IntField int 5\n\
             \n\
             bind OnUpdate IntField   # map the field\n\
             adapter int string\n\
             start\n\
             inc IntField\n",
        )
        .unwrap();

        let statements: Vec<_> = lines.iter().map(|l| l.statement).collect();
        assert_eq!(
            statements,
            [
                Statement::Set {
                    property: "IntField",
                    ty: "int",
                    literal: "5"
                },
                Statement::Bind {
                    field: "OnUpdate",
                    property: "IntField"
                },
                Statement::Adapter {
                    source: "int",
                    destination: "string"
                },
                Statement::Start,
                Statement::Inc {
                    property: "IntField"
                },
            ]
        );
        assert_eq!(lines[1].number, 4);
    }

    #[test]
    fn string_literals_keep_inner_spaces() {
        let lines = parse("set Title string hello  world  ").unwrap();
        assert_eq!(
            lines[0].statement,
            Statement::Set {
                property: "Title",
                ty: "string",
                literal: "hello  world"
            }
        );
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse("start\nfrobnicate").unwrap_err();
        assert_eq!(err.to_string(), "syntax error on line 2");
        assert_eq!(
            err.root_cause().to_string(),
            "unknown command 'frobnicate'"
        );

        assert!(parse("stop now").is_err());
        assert!(parse("bind OnUpdate").is_err());
        assert!(parse("set IntField").is_err());
    }
}
