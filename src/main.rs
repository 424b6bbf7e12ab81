fn main() {
    thrifter::cli::run();
}
