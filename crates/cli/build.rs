use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("notecard")
        .version("0.1.0")
        .about("Turn saved dictionary and job pages into notes")
        .arg(clap::arg!([INPUT] "Local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-k --kind <KIND> "Page kind (auto, word, job)")
                .value_name("KIND")
                .default_value("auto")
                .value_parser(["auto", "word", "job"]),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (card, json)")
                .value_name("FORMAT")
                .default_value("card")
                .value_parser(["card", "json"]),
        )
        .arg(clap::arg!(--url <URL> "Address the page was saved from").value_name("URL"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--plain "Skip the rich HTML write and emit the card as plain HTML source"))
        .arg(clap::arg!(--pretty "Pretty-print JSON output"))
        .arg(clap::arg!(--"settle-ms" <MS> "Delay before extracting, in milliseconds").default_value("150"))
        .arg(
            clap::arg!(--"exclude-tag" <MARKER> "Drop word tags containing this marker")
                .action(clap::ArgAction::Append),
        )
        .arg(
            clap::arg!(--"exclude-meta" <MARKER> "Drop job meta fragments containing this marker")
                .action(clap::ArgAction::Append),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell"]),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "notecard", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "notecard", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "notecard", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "notecard", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
