//! Interactive menu over two vectors of dimension [`MENU_DIMENSION`].
//!
//! Input is read as whitespace-separated tokens, so values may be given on
//! one line or spread over several.

use crate::{errors::VectorError, numeric::Numeric, promote::Promote, vector::FixedVector};
use log::{debug, warn};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const MENU_DIMENSION: usize = 3;

pub type MenuVector<T> = FixedVector<T, MENU_DIMENSION>;

const MENU: &str = "
=== Vector operations ===
1. Enter vectors
2. Add vectors
3. Subtract vectors
4. Multiply vectors by scalar
5. Divide vectors by scalar
6. Show current vectors
0. Exit
Choose an option: ";

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("unexpected end of input")]
    EndOfInput,

    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, MenuError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(MenuError::EndOfInput);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        self.pending.pop_front().ok_or(MenuError::EndOfInput)
    }

    fn next_value<T: Numeric>(&mut self) -> Result<T, MenuError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| MenuError::InvalidNumber(token))
    }
}

pub struct Menu<T> {
    vectors: Option<(MenuVector<T>, MenuVector<T>)>,
}

impl<T> Default for Menu<T>
where
    T: Numeric + Promote<T, Output = T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Menu<T>
where
    T: Numeric + Promote<T, Output = T>,
{
    pub fn new() -> Self {
        Self { vectors: None }
    }

    /// The last vectors entered with option 1.
    pub fn vectors(&self) -> Option<(MenuVector<T>, MenuVector<T>)> {
        self.vectors
    }

    /// Runs the menu until the exit option or the end of `input`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let mut tokens = Tokens::new(input);
        loop {
            write!(out, "{}", MENU)?;
            out.flush()?;

            let choice = match tokens.next_token() {
                Ok(token) => token,
                Err(MenuError::Io(e)) => return Err(e),
                Err(_) => {
                    debug!("input closed, leaving menu");
                    return Ok(());
                }
            };
            debug!("menu choice {:?}", choice);

            let step = match choice.parse::<i32>() {
                Ok(0) => {
                    writeln!(out, "Goodbye!")?;
                    return Ok(());
                }
                Ok(1) => self.enter_vectors(&mut tokens, out),
                Ok(option @ 2..=6) => match self.vectors {
                    Some((v1, v2)) => Self::operate(option, v1, v2, &mut tokens, out),
                    None => writeln!(out, "Please enter vectors first!").map_err(MenuError::from),
                },
                _ => writeln!(out, "Invalid option, try again.").map_err(MenuError::from),
            };

            match step {
                Ok(()) => {}
                Err(MenuError::Io(e)) => return Err(e),
                Err(MenuError::EndOfInput) => {
                    debug!("input closed mid-operation, leaving menu");
                    return Ok(());
                }
                Err(e @ (MenuError::InvalidNumber(_) | MenuError::Vector(_))) => {
                    warn!("option {} failed: {}", choice, e);
                    writeln!(out, "Error: {}", e)?;
                }
            }
        }
    }

    fn enter_vectors<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut Tokens<R>,
        out: &mut W,
    ) -> Result<(), MenuError> {
        let v1 = Self::read_vector(tokens, out, "vector 1")?;
        let v2 = Self::read_vector(tokens, out, "vector 2")?;
        self.vectors = Some((v1, v2));
        Ok(())
    }

    fn read_vector<R: BufRead, W: Write>(
        tokens: &mut Tokens<R>,
        out: &mut W,
        name: &str,
    ) -> Result<MenuVector<T>, MenuError> {
        write!(out, "Enter {} ({} values): ", name, MENU_DIMENSION)?;
        out.flush()?;

        let mut v = MenuVector::<T>::zeros();
        for slot in v.iter_mut() {
            *slot = tokens.next_value()?;
        }

        Ok(v)
    }

    fn read_scalar<R: BufRead, W: Write>(
        tokens: &mut Tokens<R>,
        out: &mut W,
    ) -> Result<T, MenuError> {
        write!(out, "Enter scalar: ")?;
        out.flush()?;
        tokens.next_value()
    }

    fn operate<R: BufRead, W: Write>(
        option: i32,
        v1: MenuVector<T>,
        v2: MenuVector<T>,
        tokens: &mut Tokens<R>,
        out: &mut W,
    ) -> Result<(), MenuError> {
        // both results are computed before printing so a failure prints
        // nothing but the error
        match option {
            2 => writeln!(out, "v1 + v2 = {}", v1.try_add(v2)?)?,
            3 => writeln!(out, "v1 - v2 = {}", v1.try_sub(v2)?)?,
            4 => {
                let scalar = Self::read_scalar(tokens, out)?;
                let (p1, p2) = (v1.try_mul_scalar(scalar)?, v2.try_mul_scalar(scalar)?);
                writeln!(out, "v1 * scalar = {}", p1)?;
                writeln!(out, "v2 * scalar = {}", p2)?;
            }
            5 => {
                let scalar = Self::read_scalar(tokens, out)?;
                let (q1, q2) = (v1.div_scalar(scalar)?, v2.div_scalar(scalar)?);
                writeln!(out, "v1 / scalar = {}", q1)?;
                writeln!(out, "v2 / scalar = {}", q2)?;
            }
            _ => {
                writeln!(out, "Vector 1: {}", v1)?;
                writeln!(out, "Vector 2: {}", v2)?;
            }
        }

        Ok(())
    }
}
