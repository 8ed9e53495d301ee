// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Lua表字面量的极简解析器
//!
//! 维基模块页面以`return { ... }`形式内嵌一张嵌套数据表。
//! 这里按其实际用到的语法子集做递归下降解析，直接产出JSON值：
//! 表、字符串、数字、布尔、nil、行注释与块注释、`,`/`;`分隔符。
//! 仅含顺序元素的表输出为数组，含键的表输出为对象。
//!
//! 输入来源不可靠，解析器保留一项修复：未闭合的字符串在行尾收束。

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Lua表解析错误
#[derive(Error, Debug)]
#[error("{message} (offset {offset})")]
pub struct LuaError {
    /// 错误描述
    pub message: String,
    /// 出错位置的字节偏移
    pub offset: usize,
}

/// 解析一段`return { ... }`形式的Lua模块源码
pub fn parse_lua_table(source: &str) -> Result<Value, LuaError> {
    let mut parser = Parser::new(source);
    parser.skip_trivia();
    parser.consume_keyword("return");
    let value = parser.parse_value()?;
    // 尾部允许残留注释与空白
    Ok(value)
}

/// 截取错误偏移附近的源码片段，用于日志定位
pub fn context_window(source: &str, offset: usize, radius: usize) -> &str {
    let mut start = offset.saturating_sub(radius);
    let mut end = (offset + radius).min(source.len());
    while start > 0 && !source.is_char_boundary(start) {
        start -= 1;
    }
    while end < source.len() && !source.is_char_boundary(end) {
        end += 1;
    }
    &source[start..end]
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.src[self.pos..].starts_with(prefix)
    }

    fn error(&self, message: impl Into<String>) -> LuaError {
        LuaError {
            message: message.into(),
            offset: self.pos,
        }
    }

    /// 跳过空白与注释
    fn skip_trivia(&mut self) {
        loop {
            while self.peek().is_some_and(|c| c.is_whitespace()) {
                self.bump();
            }
            if !self.starts_with("--") {
                break;
            }
            self.pos += 2;
            if self.starts_with("[[") {
                // 块注释，直到]]或输入结束
                self.pos += 2;
                while self.pos < self.src.len() && !self.starts_with("]]") {
                    self.bump();
                }
                if self.starts_with("]]") {
                    self.pos += 2;
                }
            } else {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.bump();
                }
            }
        }
    }

    /// 若紧跟指定关键字则消费之
    fn consume_keyword(&mut self, keyword: &str) -> bool {
        if !self.starts_with(keyword) {
            return false;
        }
        let rest = &self.src[self.pos + keyword.len()..];
        let at_boundary = rest
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric() && c != '_');
        if at_boundary {
            self.pos += keyword.len();
        }
        at_boundary
    }

    fn expect(&mut self, expected: char) -> Result<(), LuaError> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", expected)))
        }
    }

    fn parse_value(&mut self) -> Result<Value, LuaError> {
        self.skip_trivia();
        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some('{') => self.parse_table(),
            Some('"') | Some('\'') => Ok(Value::String(self.parse_string()?)),
            Some('-') | Some('0'..='9') => self.parse_number(),
            Some(_) => {
                if self.consume_keyword("nil") {
                    Ok(Value::Null)
                } else if self.consume_keyword("true") {
                    Ok(Value::Bool(true))
                } else if self.consume_keyword("false") {
                    Ok(Value::Bool(false))
                } else {
                    Err(self.error("unexpected token"))
                }
            }
        }
    }

    fn parse_table(&mut self) -> Result<Value, LuaError> {
        self.expect('{')?;
        let mut positional: Vec<Value> = Vec::new();
        let mut keyed: Vec<(String, Value)> = Vec::new();

        loop {
            self.skip_trivia();
            match self.peek() {
                None => return Err(self.error("unterminated table")),
                Some('}') => {
                    self.bump();
                    break;
                }
                Some('[') => {
                    // ["key"] = value 或 [123] = value
                    self.bump();
                    self.skip_trivia();
                    let key = match self.peek() {
                        Some('"') | Some('\'') => self.parse_string()?,
                        Some('-') | Some('0'..='9') => match self.parse_number()? {
                            Value::Number(number) => number.to_string(),
                            _ => unreachable!("parse_number only returns numbers"),
                        },
                        _ => return Err(self.error("unsupported table key")),
                    };
                    self.skip_trivia();
                    self.expect(']')?;
                    self.skip_trivia();
                    self.expect('=')?;
                    let value = self.parse_value()?;
                    keyed.push((key, value));
                }
                Some(_) => {
                    if let Some(key) = self.try_parse_ident_key() {
                        let value = self.parse_value()?;
                        keyed.push((key, value));
                    } else {
                        positional.push(self.parse_value()?);
                    }
                }
            }

            self.skip_trivia();
            match self.peek() {
                Some(',') | Some(';') => {
                    self.bump();
                }
                // '}'在下一轮收尾；None在下一轮报错
                Some('}') | None => {}
                Some(_) => return Err(self.error("expected ',' or '}' in table")),
            }
        }

        if keyed.is_empty() {
            Ok(Value::Array(positional))
        } else {
            let mut map = Map::new();
            // 顺序元素并入对象时按Lua惯例使用1起始的数字键
            for (i, value) in positional.into_iter().enumerate() {
                map.insert((i + 1).to_string(), value);
            }
            for (key, value) in keyed {
                map.insert(key, value);
            }
            Ok(Value::Object(map))
        }
    }

    /// 尝试解析`ident = `形式的裸标识符键
    ///
    /// 后面不是`=`（或是`==`）时回退原位并返回None
    fn try_parse_ident_key(&mut self) -> Option<String> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return None,
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.bump();
            } else {
                break;
            }
        }
        let ident = self.src[start..self.pos].to_string();
        self.skip_trivia();
        if self.peek() == Some('=') && !self.starts_with("==") {
            self.bump();
            Some(ident)
        } else {
            self.pos = start;
            None
        }
    }

    fn parse_string(&mut self) -> Result<String, LuaError> {
        let quote = self.bump().expect("caller checked the opening quote");
        let mut out = String::new();
        loop {
            match self.peek() {
                // 输入截断或行尾：按已读内容收束（未闭合字符串修复）
                None | Some('\n') => return Ok(out),
                Some(c) if c == quote => {
                    self.bump();
                    return Ok(out);
                }
                Some('\\') => {
                    self.bump();
                    let escaped = self.bump().ok_or_else(|| self.error("unterminated escape"))?;
                    match escaped {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'r' => out.push('\r'),
                        '"' => out.push('"'),
                        '\'' => out.push('\''),
                        '\\' => out.push('\\'),
                        other => {
                            out.push('\\');
                            out.push(other);
                        }
                    }
                }
                Some(_) => {
                    let c = self.bump().expect("peeked char is present");
                    out.push(c);
                }
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value, LuaError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        let mut after_exponent = false;
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_digit() || c == '.' => {
                    after_exponent = false;
                    self.bump();
                }
                Some('e') | Some('E') => {
                    after_exponent = true;
                    self.bump();
                }
                Some('+') | Some('-') if after_exponent => {
                    after_exponent = false;
                    self.bump();
                }
                _ => break,
            }
        }
        let text = &self.src[start..self.pos];
        if let Ok(int) = text.parse::<i64>() {
            return Ok(Value::Number(Number::from(int)));
        }
        match text.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(number) => Ok(Value::Number(number)),
            None => Err(LuaError {
                message: format!("invalid number literal '{}'", text),
                offset: start,
            }),
        }
    }
}
