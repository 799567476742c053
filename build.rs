use std::fs;

fn main() {
    // Compiled-in site defaults must parse and carry a [site] table
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={config_path}");

    let content =
        fs::read_to_string(config_path).expect("Failed to read site defaults in default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid site defaults in default_config.toml: {e}"),
    };
    if !table.get("site").is_some_and(toml::Value::is_table) {
        panic!("default_config.toml is missing its [site] table");
    }
}
