use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::error::FileWriteError;
use crate::fixture::{DEFAULT_OUTPUT, FixtureRow, HEADERS, ROWS, SHEET_TITLE};

/// 一个单元格：文本按字符串原样写入，数字保持数值类型。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Text(&'a str),
    Number(f64),
}

fn column_number_to_name(mut column: usize) -> String {
    // 1 -> A, 26 -> Z, 27 -> AA ...
    let mut name = String::new();
    while column > 0 {
        let rem = ((column - 1) % 26) as u8;
        name.insert(0, (b'A' + rem) as char);
        column = (column - 1) / 26;
    }
    name
}

fn cell_ref(col_1_based: usize, row_1_based: usize) -> String {
    format!("{}{}", column_number_to_name(col_1_based), row_1_based)
}

pub fn header_fields() -> [Field<'static>; 9] {
    HEADERS.map(Field::Text)
}

pub fn row_fields(row: &FixtureRow) -> [Field<'static>; 9] {
    let &(date, kind, doc_number, name, account, department, class, amount, memo) = row;
    [
        Field::Text(date),
        Field::Text(kind),
        Field::Text(doc_number),
        Field::Text(name),
        Field::Text(account),
        Field::Text(department),
        Field::Text(class),
        Field::Number(amount),
        Field::Text(memo),
    ]
}

/// 新建工作簿，并把默认工作表改名为 "Transaction Detail"。
pub fn new_document() -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    book.get_active_sheet_mut().set_name(SHEET_TITLE);
    book
}

pub fn append_row(sheet: &mut Worksheet, row_1_based: usize, fields: &[Field<'_>]) {
    for (i, field) in fields.iter().enumerate() {
        let addr = cell_ref(i + 1, row_1_based);
        let cell = sheet.get_cell_mut(addr.as_str());
        // set_value() 会猜类型（"2024-01-15" 之类可能被当成数字），这里显式指定
        match *field {
            Field::Text(s) => {
                cell.set_value_string(s);
            }
            Field::Number(n) => {
                cell.set_value_number(n);
            }
        }
    }
}

/// 第 1 行表头，之后按声明顺序写入 [`ROWS`]。
pub fn build_document() -> Spreadsheet {
    let mut book = new_document();
    let sheet = book.get_active_sheet_mut();

    append_row(sheet, 1, &header_fields());
    for (row_idx, row) in ROWS.iter().enumerate() {
        append_row(sheet, row_idx + 2, &row_fields(row));
    }
    debug!(rows = ROWS.len() + 1, sheet = SHEET_TITLE, "工作表已填充");

    book
}

pub fn write_document(book: &Spreadsheet, path: &Path) -> std::result::Result<(), FileWriteError> {
    // umya 对没有文件名或扩展名非 UTF-8 的路径会直接 unwrap panic
    if path.file_name().is_none() || path.extension().and_then(OsStr::to_str).is_none() {
        return Err(FileWriteError {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "输出路径必须包含文件名和 UTF-8 扩展名",
            )
            .into(),
        });
    }

    umya_spreadsheet::writer::xlsx::write(book, path).map_err(|source| FileWriteError {
        path: path.to_path_buf(),
        source,
    })
}

/// 生成并写入 `path`，已存在的文件直接覆盖。
pub fn generate(path: &Path) -> Result<PathBuf> {
    let book = build_document();
    debug!(path = %path.display(), "写入文件");
    write_document(&book, path)?;
    info!(path = %path.display(), "示例文件已写入");
    Ok(path.to_path_buf())
}

fn output_path(arg: Option<OsString>) -> PathBuf {
    let mut path = arg
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    // umya 写文件时用扩展名拼临时文件名
    if path.extension().is_none() {
        path.set_extension("xlsx");
    }
    path
}

pub fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let _exe = args.next();

    let output = output_path(args.next());
    let extra: Vec<OsString> = args.collect();
    if !extra.is_empty() {
        warn!(?extra, "忽略多余的参数");
    }

    let out = generate(&output)?;
    println!("已生成示例文件: {}", out.display());
    Ok(())
}
