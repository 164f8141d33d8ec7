use std::{env, fs, path::Path};
use std::io::{BufRead, BufReader};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("word_data.rs");

    // 读取数据文件
    let data_file = "data/wordlist.txt";
    let file = fs::File::open(data_file).expect("Failed to open data file");
    let reader = BufReader::new(file);

    let mut word_array = Vec::new();

    for line in reader.lines() {
        let line = line.expect("Error reading line");
        if line.trim().is_empty() {
            continue; // 跳过空行
        }

        let (_, word) = line
            .split_once('\t')
            .unwrap_or_else(|| panic!("Invalid data format: {}", line));
        let word = word.trim();

        // 只接受小写 ASCII 单词，避免大小写处理出错
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            panic!("Invalid word in {}: {:?}", data_file, word);
        }

        word_array.push(format!("\"{}\"", word));
    }

    if word_array.is_empty() {
        panic!("{} contains no words", data_file);
    }

    let code = format!(r#"pub static WORDS: [&str; {}] = [{}];"#,
        word_array.len(),
        word_array.join(", ")
    );

    fs::write(dest_path, code).expect("Failed to write generated file");

    // 确保数据文件变化时重建
    println!("cargo:rerun-if-changed={}", data_file);
}
