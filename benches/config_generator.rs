//! Generates synthetic INI files of specified line counts for benchmarking

pub fn generate_config(target_lines: usize) -> String {
    let mut output = String::with_capacity(target_lines * 32);

    output.push_str("# Synthetic benchmark config\n");
    output.push_str("name = bench\n");
    output.push_str("version = 1\n");
    output.push('\n');

    let mut lines = 4;
    let mut section_num = 0;

    while lines < target_lines {
        // A new section every ~25 lines, each introduced by a comment
        output.push_str(&format!("; section {}\n", section_num));
        output.push_str(&format!("[section{}]\n", section_num));
        section_num += 1;
        lines += 2;

        let values_in_section = target_lines.saturating_sub(lines).clamp(1, 22);
        for i in 0..values_in_section {
            let val_id = (section_num - 1) * 25 + i;
            match i % 5 {
                0 => output.push_str(&format!("int_{} = {}\n", val_id, val_id * 10)),
                1 => {
                    output.push_str(&format!("float_{} = {:.2}\n", val_id, val_id as f64 * 0.5))
                }
                2 => output.push_str(&format!(
                    "str_{} = value_{}  # note {}\n",
                    val_id, val_id, val_id
                )),
                3 => {
                    let flag = if val_id % 2 == 0 { "yes" } else { "no" };
                    output.push_str(&format!("bool_{} = {}\n", val_id, flag))
                }
                4 => output.push_str(&format!(
                    "# about key_{}\nkey_{} = \\#{:06x}\n",
                    val_id, val_id, val_id
                )),
                _ => unreachable!(),
            }
            lines += if i % 5 == 4 { 2 } else { 1 };
        }

        output.push('\n');
        lines += 1;
    }

    output
}
