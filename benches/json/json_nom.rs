use std::collections::HashMap;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, multispace0},
    combinator::{map, value},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, preceded, separated_pair},
    IResult,
};

use crate::JsonValue;

fn sp(i: &str) -> IResult<&str, &str> {
    multispace0(i)
}

fn string(i: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while(|c| c != '"'), char('"'))(i)
}

fn boolean(i: &str) -> IResult<&str, bool> {
    alt((value(true, tag("true")), value(false, tag("false"))))(i)
}

fn array(i: &str) -> IResult<&str, Vec<JsonValue>> {
    delimited(
        char('['),
        separated_list0(preceded(sp, char(',')), json_value),
        preceded(sp, char(']')),
    )(i)
}

fn key_value(i: &str) -> IResult<&str, (&str, JsonValue)> {
    separated_pair(preceded(sp, string), preceded(sp, char(':')), json_value)(i)
}

fn hash(i: &str) -> IResult<&str, HashMap<String, JsonValue>> {
    map(
        delimited(
            char('{'),
            separated_list0(preceded(sp, char(',')), key_value),
            preceded(sp, char('}')),
        ),
        |pairs| pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
    )(i)
}

fn json_value(i: &str) -> IResult<&str, JsonValue> {
    preceded(
        sp,
        alt((
            map(hash, JsonValue::Object),
            map(array, JsonValue::Array),
            map(string, |s| JsonValue::Str(s.to_string())),
            map(double, JsonValue::Num),
            map(boolean, JsonValue::Boolean),
            value(JsonValue::Null, tag("null")),
        )),
    )(i)
}

pub fn nom_parser(s: &str) -> JsonValue {
    json_value(s).map(|(_, v)| v).unwrap_or(JsonValue::Null)
}
