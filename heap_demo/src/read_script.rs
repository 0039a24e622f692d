use std::{io::BufRead, str::FromStr};

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, line_ending, not_line_ending, space0, space1},
    combinator::{eof, map, map_res, opt, recognize, value},
    multi::many0,
    sequence::preceded,
};
use num::Signed;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Init(Vec<i64>),
    Push(i64),
    Pop,
    Drain,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CommentOrCommand {
    Comment(String),
    Blank,
    Command(Command),
}

#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Syntax { line_number: usize, line: String },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::Io(error) => write!(f, "failed to read script: {}", error),
            ScriptError::Syntax { line_number, line } => {
                write!(f, "syntax error at line {}: {:?}", line_number, line)
            }
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(error: std::io::Error) -> Self {
        ScriptError::Io(error)
    }
}

pub fn read_script(input: &mut impl BufRead) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::default();

    let mut line = String::default();
    let mut line_number = 0;
    loop {
        line.clear();
        let bytes = input.read_line(&mut line)?;
        if bytes == 0 {
            break;
        }
        line_number += 1;
        let Ok((residual, comment_or_command)) = comment_or_command(line.as_str()) else {
            return Err(ScriptError::Syntax {
                line_number,
                line: line.trim_end().to_string(),
            });
        };
        if residual != "" {
            return Err(ScriptError::Syntax {
                line_number,
                line: line.trim_end().to_string(),
            });
        }

        match comment_or_command {
            CommentOrCommand::Command(command) => commands.push(command),
            CommentOrCommand::Comment(comment) => log::trace!("line {}: *{}", line_number, comment),
            CommentOrCommand::Blank => {}
        }
    }

    return Ok(commands);
}

fn comment_or_command(input: &str) -> IResult<&str, CommentOrCommand> {
    // <comment_or_command> ::= <comment> | <command> | <blank>
    alt((
        map(comment, CommentOrCommand::Comment),
        map(command, CommentOrCommand::Command),
        value(CommentOrCommand::Blank, (space0, end_of_line)),
    ))
    .parse(input)
}

fn end_of_line(input: &str) -> IResult<&str, &str> {
    // the last line of a script may lack its newline
    alt((line_ending, eof)).parse(input)
}

fn comment(input: &str) -> IResult<&str, String> {
    // <comment> ::= "*" <any_sequence_of_characters_other_than_EOL> <EOL>
    map((tag("*"), not_line_ending, end_of_line), |(_, comment, _)| {
        str::to_string(comment)
    })
    .parse(input)
}

fn command(input: &str) -> IResult<&str, Command> {
    // <command> ::= <zeroOrMoreSpace> <operation> <zeroOrMoreSpace> <EOL>
    map(
        (space0, operation, space0, end_of_line),
        |(_, operation, _, _)| operation,
    )
    .parse(input)
}

fn operation(input: &str) -> IResult<&str, Command> {
    // <operation> ::= "init" <sequence_of_integers> | "push" <oneOrMoreSpace> <integer> | "pop" | "drain"
    alt((
        map(preceded(tag("init"), many0(preceded(space1, integer))), Command::Init),
        map(preceded((tag("push"), space1), integer), Command::Push),
        value(Command::Pop, tag("pop")),
        value(Command::Drain, tag("drain")),
    ))
    .parse(input)
}

fn integer<IntT: Signed + FromStr>(input: &str) -> IResult<&str, IntT> {
    // <integer> ::= ["+" | "-"] <unsigned_integer>
    map_res(
        recognize((opt(alt((tag("+"), tag("-")))), digit1)),
        str::parse,
    )
    .parse(input)
}

#[cfg(test)]
mod test {

    use std::io::BufReader;

    use super::{Command, CommentOrCommand, ScriptError, comment_or_command, integer, read_script};

    #[test]
    fn test_integer() {
        assert_eq!(integer::<i64>("123"), Ok(("", 123)));
        assert_eq!(integer::<i64>("+123"), Ok(("", 123)));
        assert_eq!(integer::<i64>("-123 4"), Ok((" 4", -123)));
        assert_eq!(integer::<i32>("7x"), Ok(("x", 7)));

        assert!(integer::<i64>("").is_err());
        assert!(integer::<i64>("+").is_err());
        assert!(integer::<i64>("- 1").is_err());
        assert!(integer::<i8>("300").is_err());
    }

    #[test]
    fn test_comment_or_command() {
        assert_eq!(
            comment_or_command("init 1 5 2 8\n"),
            Ok(("", CommentOrCommand::Command(Command::Init(vec![1, 5, 2, 8]))))
        );
        assert_eq!(
            comment_or_command("init\n"),
            Ok(("", CommentOrCommand::Command(Command::Init(vec![]))))
        );
        assert_eq!(
            comment_or_command("  push -7  \n"),
            Ok(("", CommentOrCommand::Command(Command::Push(-7))))
        );
        assert_eq!(
            comment_or_command("pop"),
            Ok(("", CommentOrCommand::Command(Command::Pop)))
        );
        assert_eq!(
            comment_or_command("drain\r\n"),
            Ok(("", CommentOrCommand::Command(Command::Drain)))
        );
        assert_eq!(
            comment_or_command("* a comment\n"),
            Ok(("", CommentOrCommand::Comment(" a comment".to_string())))
        );
        assert_eq!(comment_or_command("   \n"), Ok(("", CommentOrCommand::Blank)));

        assert!(comment_or_command("push\n").is_err());
        assert!(comment_or_command("push x\n").is_err());
        assert!(comment_or_command("peek\n").is_err());
    }

    #[test]
    fn test_read_script() {
        let input = "* sample session\ninit 1 5 2 8\n\npush 7\npop\ndrain";
        let commands = read_script(&mut BufReader::new(input.as_bytes())).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Init(vec![1, 5, 2, 8]),
                Command::Push(7),
                Command::Pop,
                Command::Drain,
            ]
        );
    }

    #[test]
    fn test_read_script_syntax_error() {
        let input = "init 1 2\npush 3 4\n";
        let result = read_script(&mut BufReader::new(input.as_bytes()));
        match result {
            Err(ScriptError::Syntax { line_number, line }) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "push 3 4");
            }
            _ => panic!("{:?}", result),
        }
    }
}
