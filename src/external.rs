//! A C API for interacting with `ParsedName` objects.

extern crate libc;

use self::libc::c_char;
use super::ParsedName;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

// Interior NULs can't come from C input, but guard against them anyway
// rather than panicking across the FFI boundary
macro_rules! str_to_char_star {
    ($str:expr) => {{
        match CString::new($str) {
            Ok(s) => s.into_raw(),
            Err(_) => ptr::null_mut(),
        }
    }};
}

#[no_mangle]
pub unsafe extern "C" fn name_splitter_parse(input: *const c_char) -> *mut ParsedName {
    if input.is_null() {
        return ptr::null_mut();
    }
    let s = CStr::from_ptr(input).to_string_lossy();
    Box::into_raw(Box::new(ParsedName::parse(&s)))
}

#[no_mangle]
pub unsafe extern "C" fn name_splitter_free_name(name_ptr: *mut ParsedName) {
    if !name_ptr.is_null() {
        mem::drop(Box::from_raw(name_ptr));
    }
}

#[no_mangle]
pub unsafe extern "C" fn name_splitter_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        mem::drop(CString::from_raw(str_ptr));
    }
}

#[no_mangle]
pub unsafe extern "C" fn name_splitter_honorific(name: &ParsedName) -> *mut c_char {
    str_to_char_star!(name.honorific())
}

#[no_mangle]
pub unsafe extern "C" fn name_splitter_first_name(name: &ParsedName) -> *mut c_char {
    str_to_char_star!(name.first_name())
}

#[no_mangle]
pub unsafe extern "C" fn name_splitter_initials(name: &ParsedName) -> *mut c_char {
    str_to_char_star!(name.initials())
}

#[no_mangle]
pub unsafe extern "C" fn name_splitter_last_name(name: &ParsedName) -> *mut c_char {
    str_to_char_star!(name.last_name())
}

#[no_mangle]
pub unsafe extern "C" fn name_splitter_suffix(name: &ParsedName) -> *mut c_char {
    str_to_char_star!(name.suffix())
}

#[no_mangle]
pub unsafe extern "C" fn name_splitter_display(name: &ParsedName) -> *mut c_char {
    str_to_char_star!(name.to_string())
}
