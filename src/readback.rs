use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};

use crate::fixture::SHEET_TITLE;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub kind: String,
    pub document_number: String,
    pub name: String,
    pub account: String,
    pub department: String,
    pub class: String,
    pub amount: f64,
    pub memo: String,
}

fn datatype_to_string(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Float(n)) => {
            if n.fract() == 0.0 {
                format!("{:.0}", n)
            } else {
                n.to_string()
            }
        }
        Some(Data::Int(n)) => n.to_string(),
        Some(other) => format!("{other:?}"),
    }
}

/// 读取 "Transaction Detail" 工作表的全部行（含表头）。
pub fn read_rows(path: &Path) -> Result<Vec<Vec<Data>>> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("无法打开文件: {}", path.display()))?;

    if !workbook.sheet_names().iter().any(|name| name == SHEET_TITLE) {
        bail!("找不到工作表: {SHEET_TITLE}");
    }

    let range = workbook
        .worksheet_range(SHEET_TITLE)
        .with_context(|| format!("无法读取工作表: {SHEET_TITLE}"))?;

    Ok(range.rows().map(|row| row.to_vec()).collect())
}

struct Columns(HashMap<String, usize>);

impl Columns {
    fn from_header(header: &[Data]) -> Self {
        let mut map = HashMap::new();
        for (col, cell) in header.iter().enumerate() {
            let name = datatype_to_string(Some(cell)).trim().to_lowercase();
            if !name.is_empty() {
                map.insert(name, col);
            }
        }
        Columns(map)
    }

    // 按别名顺序取第一个命中的列
    fn find(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| self.0.get(*alias).copied())
    }

    fn text(&self, row: &[Data], aliases: &[&str]) -> String {
        self.find(aliases)
            .map(|col| datatype_to_string(row.get(col)).trim().to_string())
            .unwrap_or_default()
    }
}

const DATE: &[&str] = &["date", "transaction date"];
const TYPE: &[&str] = &["type", "transaction type"];
const DOC_NUMBER: &[&str] = &["document number", "doc number", "number"];
const NAME: &[&str] = &["name", "vendor", "employee", "customer"];
const ACCOUNT: &[&str] = &["account", "account name"];
const DEPARTMENT: &[&str] = &["department", "dept"];
const CLASS: &[&str] = &["class", "classification"];
const AMOUNT: &[&str] = &["amount", "debit", "credit"];
const MEMO: &[&str] = &["memo", "description"];

fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .with_context(|| format!("日期格式错误: {value}"))
}

/// 支持 `1,234.50`、`$500`、`(200)`（负数），空值按 0 处理。
fn parse_amount_text(value: &str) -> Result<f64> {
    let cleaned = value
        .trim()
        .replace(',', "")
        .replace('$', "")
        .replace('(', "-")
        .replace(')', "");
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    cleaned
        .parse::<f64>()
        .with_context(|| format!("金额格式错误: {value}"))
}

fn parse_amount(cell: Option<&Data>) -> Result<f64> {
    match cell {
        Some(Data::Float(n)) => Ok(*n),
        Some(Data::Int(n)) => Ok(*n as f64),
        other => parse_amount_text(&datatype_to_string(other)),
    }
}

fn is_blank(row: &[Data]) -> bool {
    row.iter()
        .all(|cell| datatype_to_string(Some(cell)).trim().is_empty())
}

pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let rows = read_rows(path)?;
    let (header, body) = rows
        .split_first()
        .ok_or_else(|| anyhow!("工作表 {SHEET_TITLE} 中没有表头"))?;

    let columns = Columns::from_header(header);
    let date_col = columns.find(DATE).ok_or_else(|| anyhow!("找不到'Date'列"))?;
    let amount_col = columns
        .find(AMOUNT)
        .ok_or_else(|| anyhow!("找不到'Amount'列"))?;

    let mut transactions = Vec::with_capacity(body.len());
    for (idx, row) in body.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        // 表头是第 1 行
        let row_no = idx + 2;

        let date = parse_date(&datatype_to_string(row.get(date_col)))
            .with_context(|| format!("第 {row_no} 行"))?;
        let amount = parse_amount(row.get(amount_col)).with_context(|| format!("第 {row_no} 行"))?;

        transactions.push(Transaction {
            date,
            kind: columns.text(row, TYPE),
            document_number: columns.text(row, DOC_NUMBER),
            name: columns.text(row, NAME),
            account: columns.text(row, ACCOUNT),
            department: columns.text(row, DEPARTMENT),
            class: columns.text(row, CLASS),
            amount,
            memo: columns.text(row, MEMO),
        });
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_text_formats() {
        assert_eq!(parse_amount_text("1,234.50").unwrap(), 1234.5);
        assert_eq!(parse_amount_text("$500").unwrap(), 500.0);
        assert_eq!(parse_amount_text("(200)").unwrap(), -200.0);
        assert_eq!(parse_amount_text("  ").unwrap(), 0.0);
        assert!(parse_amount_text("n/a").is_err());
    }

    #[test]
    fn amount_cells() {
        assert_eq!(parse_amount(Some(&Data::Float(100000.0))).unwrap(), 100000.0);
        assert_eq!(parse_amount(Some(&Data::Int(42))).unwrap(), 42.0);
        assert_eq!(parse_amount(Some(&Data::String("$1,500".into()))).unwrap(), 1500.0);
        assert_eq!(parse_amount(None).unwrap(), 0.0);
    }

    #[test]
    fn dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15").unwrap(), expected);
        assert_eq!(parse_date("2024-01-15T00:00:00").unwrap(), expected);
        assert!(parse_date("15/01/2024").is_err());
    }

    #[test]
    fn header_aliases_are_case_insensitive() {
        let header = vec![
            Data::String(" Transaction Date ".into()),
            Data::String("VENDOR".into()),
            Data::Empty,
            Data::String("Debit".into()),
        ];
        let columns = Columns::from_header(&header);
        assert_eq!(columns.find(DATE), Some(0));
        assert_eq!(columns.find(NAME), Some(1));
        assert_eq!(columns.find(AMOUNT), Some(3));
        assert_eq!(columns.find(MEMO), None);

        let row = vec![
            Data::String("2024-02-01".into()),
            Data::String(" GitHub ".into()),
            Data::Empty,
            Data::Float(500.0),
        ];
        assert_eq!(columns.text(&row, NAME), "GitHub");
        assert_eq!(columns.text(&row, MEMO), "");
    }

    #[test]
    fn blank_rows() {
        assert!(is_blank(&[Data::Empty, Data::String("  ".into())]));
        assert!(!is_blank(&[Data::Empty, Data::Float(0.0)]));
    }
}
