use std::iter::{Iterator, Peekable};
use std::str::FromStr;

use log::LevelFilter;

fn matches_flag(s: &str, short: &str, long: &str) -> bool {
  match s.strip_prefix("--") {
    Some(t) => t == long,
    None => !short.is_empty() && s.strip_prefix('-') == Some(short),
  }
}

fn parse_value<R: FromStr<Err = impl std::fmt::Display>>(arg: &str, value: &str) -> R {
  match R::from_str(value.trim()) {
    Ok(res) => res,
    Err(err) => panic!("can't parse command line argument {} {}, {}", arg, value, err),
  }
}

fn try_parse_flag<I: Iterator<Item = String>>(
  it: &mut Peekable<I>,
  short: &str,
  long: &str,
) -> bool {
  if it.peek().map_or(false, |s| matches_flag(s, short, long)) {
    it.next();
    return true;
  }
  false
}

// accepts `--long=value`, `--long value` and `-s value`
fn try_parse_value<R: FromStr<Err = impl std::fmt::Display>, I: Iterator<Item = String>>(
  it: &mut Peekable<I>,
  short: &str,
  long: &str,
) -> Option<R> {
  let s = it.peek()?.clone();
  if let Some(w) = s
    .strip_prefix("--")
    .and_then(|t| t.strip_prefix(long))
    .and_then(|u| u.strip_prefix('='))
  {
    it.next();
    return Some(parse_value(&s, w));
  }
  if !matches_flag(&s, short, long) {
    return None;
  }
  it.next();
  match it.next() {
    Some(w) => Some(parse_value(&s, &w)),
    None => panic!("empty argument for command line option {}", s),
  }
}

#[derive(Debug)]
pub struct CMDOptions {
  pub reference: String,
  pub step_millis: u64,
  pub format_target: bool,
  pub level_filter: LevelFilter,
  pub args: Vec<String>,
}

impl CMDOptions {
  pub fn new<I: Iterator<Item = String>>(it: I) -> Self {
    let mut p = it.peekable();
    let mut reference = String::from("demo");
    let mut step_millis = 2000;
    let mut format_target = false;
    let mut level_filter = LevelFilter::Info;
    loop {
      if let Some(r) = try_parse_value::<String, _>(&mut p, "r", "reference") {
        reference = r;
        continue;
      }
      if let Some(s) = try_parse_value::<u64, _>(&mut p, "s", "step") {
        step_millis = s;
        continue;
      }
      if try_parse_flag(&mut p, "w", "warn") {
        level_filter = LevelFilter::Warn;
        continue;
      }
      if try_parse_flag(&mut p, "i", "info") {
        level_filter = LevelFilter::Info;
        continue;
      }
      if try_parse_flag(&mut p, "", "debug") {
        level_filter = LevelFilter::Debug;
        continue;
      }
      if try_parse_flag(&mut p, "t", "format-target") {
        format_target = true;
        continue;
      }
      break;
    }
    CMDOptions {
      reference,
      step_millis,
      format_target,
      level_filter,
      args: p.collect(),
    }
  }
}
