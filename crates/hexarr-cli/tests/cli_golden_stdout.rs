use assert_cmd::cargo::cargo_bin_cmd;

const PROMPT: &str = "Please enter hex values (separated by whitespace): ";

#[test]
fn cli_three_bytes_stdout_golden() {
    let mut cmd = cargo_bin_cmd!("hexarr");
    cmd.write_stdin("AB CD EF\n");

    cmd.assert().success().code(0).stdout(format!(
        "{PROMPT}= {{0xAB, 0xCD, 0xEF}}\n\
Length of the array: 3\n"
    ));
}

#[test]
fn cli_irregular_spacing_stdout_golden() {
    let mut cmd = cargo_bin_cmd!("hexarr");
    cmd.write_stdin("  1A   2B \n");

    cmd.assert().success().stdout(format!(
        "{PROMPT}= {{0x1A, 0x2B}}\n\
Length of the array: 2\n"
    ));
}

#[test]
fn cli_crlf_line_ending_is_ignored() {
    let mut cmd = cargo_bin_cmd!("hexarr");
    cmd.write_stdin("7E 00\r\n");

    cmd.assert().success().stdout(format!(
        "{PROMPT}= {{0x7E, 0x00}}\n\
Length of the array: 2\n"
    ));
}

#[test]
fn cli_malformed_tokens_pass_through() {
    let mut cmd = cargo_bin_cmd!("hexarr");
    cmd.write_stdin("zz 0G\n");

    cmd.assert().success().stdout(format!(
        "{PROMPT}= {{0xzz, 0x0G}}\n\
Length of the array: 2\n"
    ));
}

#[test]
fn cli_information_separators_split_tokens() {
    let mut cmd = cargo_bin_cmd!("hexarr");
    cmd.write_stdin("AB\x1fCD\x1cEF\n");

    cmd.assert().success().stdout(format!(
        "{PROMPT}= {{0xAB, 0xCD, 0xEF}}\n\
Length of the array: 3\n"
    ));
}
