// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

/// Derive a URL slug from a display name: lower-case the name and collapse
/// every run of characters outside [a-z0-9] into a single hyphen.
///
/// A name that starts or ends with punctuation keeps the resulting edge
/// hyphen; the tag delete endpoint addresses tags by exactly this form.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    slug
}

/// Slug derivation for form auto-fill: same as [`slugify`] but with edge
/// hyphens trimmed, which is what the authoring forms prefill into an
/// untouched slug field.
pub fn slugify_trimmed(name: &str) -> String {
    slugify(name).trim_matches('-').to_string()
}
