fn main() {
    prompt_charter::app::cli::run();
}
