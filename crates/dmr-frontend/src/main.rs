fn main() {
    dmr_frontend::main();
}
