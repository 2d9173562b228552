fn main() {
    compiler_options::cli::run();
}
