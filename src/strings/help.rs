//! # Help Text
//!
//! Help message for the terminal wizard commands.
//! Displayed to the user via the `.help` command.

pub const MAIN: &str = concat!(
    "**🧙 Character Wizard Help**\n",
    "Use: .command _args_\n",
    "\n",
    "**🎨 Step 1: Appearance**\n",
    "* .pick [field] [option]: Choose one option for a field\n",
    "\n",
    "**💬 Step 2: Personality**\n",
    "* .name [text]: Set the character name\n",
    "* .age [n]: Set the character age (18-80)\n",
    "* .toggle [traits|interests] [option]: Add or remove a choice\n",
    "* .occupation [option]: Choose the occupation\n",
    "\n",
    "**⚡ Misc**\n",
    "* .ok: Press the main button (Next / Save Character)\n",
    "* .show: Current step, selections and preview\n",
    "* .options [field]: List fields, or the choices of one field\n",
    "* .help: This message\n",
    "* .quit: Leave without saving\n"
);
